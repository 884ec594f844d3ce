use dioxus::prelude::*;

use crate::common::copyright_line;
use crate::config::SITE;

#[component]
pub fn Footer() -> Element {
    let copyright = copyright_line(SITE.owner);
    let credit = SITE.music.credit;

    rsx! {
        footer { class: "site-footer",
            p { "{copyright}" }
            p {
                "All content and material on this website are protected under copyright law and may not be reproduced without permission."
            }
            p { "{credit}" }
        }
    }
}
