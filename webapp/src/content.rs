use dioxus::prelude::*;

use crate::components::icons::{self, Icon};
use crate::nav::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionContent {
    pub section: Section,
    pub heading: &'static str,
    pub body: &'static str,
    pub links: &'static [OutboundLink],
    pub icon_links: &'static [IconLink],
}

const LINKS: &[OutboundLink] = &[
    OutboundLink {
        label: "My YouTube Channel",
        url: "https://www.youtube.com/@Arpilotyt",
    },
    OutboundLink {
        label: "Arma Pilots Channel",
        url: "https://www.youtube.com/@armapilot",
    },
    OutboundLink {
        label: "Twitch Channel",
        url: "https://twitch.tv/arpilotyt",
    },
];

const ICON_LINKS: &[IconLink] = &[
    IconLink {
        label: "YouTube",
        icon: icons::YOUTUBE,
        url: "https://www.youtube.com/@Arpilotyt",
    },
    IconLink {
        label: "Twitch",
        icon: icons::TWITCH,
        url: "https://twitch.tv/arpilotyt",
    },
    IconLink {
        label: "Twitter",
        icon: icons::TWITTER,
        url: "https://twitter.com/yourtwitter",
    },
    IconLink {
        label: "Discord",
        icon: icons::DISCORD,
        url: "https://discord.gg/VmqBBwkHBN",
    },
];

// home first, it doubles as the fallback
const CONTENT: [SectionContent; 4] = [
    SectionContent {
        section: Section::Home,
        heading: "Welcome to my Website",
        body: "On this website you can explore all of my information such as links, about me and some information about my content and what I do.",
        links: &[],
        icon_links: &[],
    },
    SectionContent {
        section: Section::About,
        heading: "About Me",
        body: "I am a content creator who enjoys making content for others enjoyment my core content is mostly Arma Reforger based content and more games as time goes on!",
        links: &[],
        icon_links: &[],
    },
    SectionContent {
        section: Section::Information,
        heading: "Information",
        body: "Some Information about myself, I am a former student from a computer tech class who enjoys making websites and programming things. I have done this for 3-4 years. My content on youtube strives to be the highest quality that I can produce and someday it will gain popularity. I do try to respond to all of my fans in the comments and love support.",
        links: &[],
        icon_links: &[],
    },
    SectionContent {
        section: Section::Links,
        heading: "Links",
        body: "",
        links: LINKS,
        icon_links: ICON_LINKS,
    },
];

impl SectionContent {
    pub fn of(section: Section) -> &'static SectionContent {
        Self::lookup(section.key())
    }

    // anything we don't recognize lands on the home fragment
    pub fn lookup(key: &str) -> &'static SectionContent {
        CONTENT
            .iter()
            .find(|content| content.section.key() == key)
            .unwrap_or(&CONTENT[0])
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContentPanelProps {
    pub section: Section,
}

// the fragment is keyed on its section so every switch remounts it and replays the enter animation
#[component]
pub fn ContentPanel(props: ContentPanelProps) -> Element {
    let content = SectionContent::of(props.section);
    let body_class = if content.section == Section::Home {
        "section-body lead"
    } else {
        "section-body"
    };

    rsx! {
        div { class: "content-panel",
            for content in std::iter::once(content) {
                div {
                    key: "{content.section}",
                    class: "section-fragment",
                    "data-section": "{content.section}",
                    if content.section == Section::Home {
                        h1 { class: "section-title section-title-lg", "{content.heading}" }
                    } else {
                        h2 { class: "section-title", "{content.heading}" }
                    }
                    if !content.body.is_empty() {
                        p { class: body_class, "{content.body}" }
                    }
                    if !content.links.is_empty() {
                        ul { class: "link-list",
                            for link in content.links {
                                li { key: "{link.url}",
                                    a {
                                        href: link.url,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                    if !content.icon_links.is_empty() {
                        div { class: "icon-links",
                            for link in content.icon_links {
                                a {
                                    key: "{link.label}",
                                    class: "icon-link",
                                    href: link.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    title: link.label,
                                    Icon { path: link.icon }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(section: Section) -> String {
        let mut dom = VirtualDom::new_with_props(ContentPanel, ContentPanelProps { section });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn heading_markup(section: Section) -> String {
        let content = SectionContent::of(section);
        let tag = if section == Section::Home { "h1" } else { "h2" };
        format!(">{}</{tag}>", content.heading)
    }

    #[test]
    fn every_section_has_its_own_entry() {
        for section in Section::ALL {
            assert_eq!(SectionContent::of(section).section, section);
            assert_eq!(SectionContent::lookup(section.key()).section, section);
        }
    }

    #[test]
    fn each_section_renders_only_its_own_heading() {
        for section in Section::ALL {
            let html = render(section);

            for other in Section::ALL {
                let heading = heading_markup(other);
                if other == section {
                    assert!(html.contains(&heading), "{section}: missing {heading} in {html}");
                } else {
                    assert!(!html.contains(&heading), "{section}: found {heading} in {html}");
                }
            }
        }
    }

    #[test]
    fn unknown_key_renders_home() {
        assert_eq!(SectionContent::lookup("contact").section, Section::Home);
        assert_eq!(SectionContent::lookup("").section, Section::Home);
        assert_eq!(SectionContent::lookup("About").section, Section::Home);

        let html = render(SectionContent::lookup("nope").section);
        assert!(html.contains(">Welcome to my Website</h1>"));
    }

    #[test]
    fn links_open_in_a_new_context() {
        let html = render(Section::Links);

        for link in LINKS {
            assert!(html.contains(link.url));
            assert!(html.contains(link.label));
        }
        for link in ICON_LINKS {
            assert!(html.contains(link.url));
        }
        assert_eq!(
            html.matches("target=\"_blank\"").count(),
            LINKS.len() + ICON_LINKS.len()
        );
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            LINKS.len() + ICON_LINKS.len()
        );
    }

    #[test]
    fn only_links_has_outbound_links() {
        for section in [Section::Home, Section::About, Section::Information] {
            assert!(!render(section).contains("<a "));
        }
    }
}
