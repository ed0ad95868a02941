#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Tallyboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    // Renderer-less builds (plain `cargo test` across the workspace) still
    // need a main; launch resolves against whichever renderer is enabled.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Dashboard {}
    }
}
