use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::core::auth::AuthMode;
use crate::core::routes::View;
use crate::core::session::SessionController;
use crate::ui::components::auth_modal::AuthModal;
use crate::ui::components::background::LiquidBackground;
use crate::ui::components::sidebar::Sidebar;
use crate::ui::components::top_bar::{MobileMenu, TopBar};
use crate::ui::pages::chat::AIChat;
use crate::ui::pages::dashboard::Dashboard;
use crate::ui::pages::energy::EnergyModule;
use crate::ui::pages::landing::Landing;
use crate::ui::pages::leaderboard::Leaderboard;
use crate::ui::pages::waste::WasteModule;

const MAIN_CSS: &str = include_str!("../../assets/main.css");

/// Root component. Owns the session controller; everything below receives a
/// snapshot and reports back through callbacks.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut session = use_signal(SessionController::new);
    let snapshot = session.read().snapshot();

    let authenticated = snapshot.is_authenticated();
    let content_key = format!("{}-{}", snapshot.view, if authenticated { "auth" } else { "unauth" });
    let main_class = if authenticated { "main with-sidebar" } else { "main" };

    rsx! {
        style { "{MAIN_CSS}" }
        div { class: "app-shell",
            LiquidBackground { theme: snapshot.theme }

            if authenticated {
                Sidebar {
                    current: snapshot.view,
                    on_navigate: move |view: View| session.write().navigate(view),
                    on_brand_click: move |_| session.write().go_home(),
                }
            }

            main { class: "{main_class}",
                TopBar {
                    snapshot: snapshot.clone(),
                    on_toggle_menu: move |_| session.write().toggle_mobile_menu(),
                    on_brand_click: move |_| session.write().go_home(),
                    on_toggle_dropdown: move |_| session.write().toggle_user_dropdown(),
                    on_logout: move |_| session.write().logout(),
                    on_open_auth: move |mode| session.write().open_auth_modal(mode),
                }

                div { class: if authenticated { "content padded" } else { "content" },
                    div { key: "{content_key}", class: "reveal",
                        if authenticated {
                            match snapshot.view {
                                View::Overview => rsx! { Dashboard {} },
                                View::Waste => rsx! { WasteModule {} },
                                View::Energy => rsx! { EnergyModule {} },
                                View::Leaderboard => rsx! { Leaderboard {} },
                                View::Chat => rsx! { AIChat {} },
                            }
                        } else {
                            Landing {
                                on_start: move |_| session.write().open_auth_modal(AuthMode::Register),
                                on_login: move |_| session.write().open_auth_modal(AuthMode::Login),
                            }
                        }
                    }
                }

                if authenticated && snapshot.flags.mobile_menu_open {
                    MobileMenu {
                        current: snapshot.view,
                        on_select: move |id: &'static str| session.write().navigate_to(id),
                        on_brand_click: move |_| session.write().go_home(),
                        on_close: move |_| session.write().close_mobile_menu(),
                    }
                }
            }

            if snapshot.flags.auth_modal_open {
                AuthModal {
                    initial_mode: snapshot.auth_mode,
                    delay: config.auth_delay(),
                    on_close: move |_| session.write().close_auth_modal(),
                    on_success: move |name: String| {
                        session.write().login(&name);
                    },
                }
            }
        }
    }
}
