use dioxus::prelude::*;

use ui::views::Dashboard;

// Embedded shared theme (ui/assets/theme/main.css); the page needs no asset
// pipeline of its own.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Dashboard {}
    }
}
