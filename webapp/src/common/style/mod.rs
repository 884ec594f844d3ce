use constcat::concat;

mod components;
mod site;
mod variables;

use components::BASE_COMPONENTS;
use site::SITE_STYLES;
use variables::CSS_VARIABLES;

pub const STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
  background-color: #000;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SITE_STYLES
);
