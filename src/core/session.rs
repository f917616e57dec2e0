//! Session and navigation state for the root component.
//!
//! The controller is the only owner of the signed-in user, the selected view
//! and the overlay flags. Every transition goes through a method here; child
//! components receive a [`SessionSnapshot`] and ask for changes through
//! callbacks.
//!
//! Two top-level states exist: signed out (`user` is `None`) and signed in.
//! Signing in only happens through [`SessionController::login`], signing out
//! only through [`SessionController::logout`].

use tracing::{debug, info};

use crate::core::auth::{AuthMode, FALLBACK_NAME};
use crate::core::routes::View;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Background accent derived from the current view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeColor {
    Emerald,
    Amber,
    Blue,
}

impl ThemeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeColor::Emerald => "emerald",
            ThemeColor::Amber => "amber",
            ThemeColor::Blue => "blue",
        }
    }
}

/// Visibility of the overlays. The mobile menu and the auth modal are never
/// open at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub mobile_menu_open: bool,
    pub auth_modal_open: bool,
    pub user_dropdown_open: bool,
}

/// Read-only view of the controller handed down to child components.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub user_name: Option<String>,
    pub view: View,
    pub theme: ThemeColor,
    pub flags: UiFlags,
    pub auth_mode: AuthMode,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user_name.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionController {
    session: Session,
    view: View,
    flags: UiFlags,
    auth_mode: AuthMode,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn flags(&self) -> UiFlags {
        self.flags
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Signs the user in. Blank names fall back to the default display name.
    pub fn login(&mut self, name: &str) -> &Session {
        let name = match name.trim() {
            "" => FALLBACK_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        info!("Signed in as {}", name);

        self.session.user = Some(User { name });
        self.view = View::Overview;
        self.flags.auth_modal_open = false;
        &self.session
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.user.take() {
            info!("Signed out {}", user.name);
        }
        self.flags.user_dropdown_open = false;
        self.flags.mobile_menu_open = false;
        self.view = View::Overview;
    }

    /// Switches the visible panel and closes the mobile menu.
    ///
    /// Ignored while signed out: there is no panel to show until the session exists.
    pub fn navigate(&mut self, view: View) {
        if !self.is_authenticated() {
            debug!("Ignoring navigation to {} while signed out", view);
            return;
        }
        self.view = view;
        self.flags.mobile_menu_open = false;
    }

    /// Navigates by identifier. Unknown identifiers leave the state untouched.
    pub fn navigate_to(&mut self, id: &str) {
        match View::from_id(id) {
            Some(view) => self.navigate(view),
            None => debug!("Ignoring navigation to unknown view {:?}", id),
        }
    }

    /// Brand click: back to the overview from either top-level state.
    pub fn go_home(&mut self) {
        self.view = View::Overview;
        self.flags.mobile_menu_open = false;
    }

    pub fn theme_color(&self) -> ThemeColor {
        derive_theme_color(self.is_authenticated(), self.view)
    }

    pub fn toggle_mobile_menu(&mut self) {
        if !self.is_authenticated() {
            return;
        }
        self.flags.mobile_menu_open = !self.flags.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.flags.mobile_menu_open = false;
    }

    pub fn toggle_user_dropdown(&mut self) {
        self.flags.user_dropdown_open = !self.flags.user_dropdown_open;
    }

    pub fn open_auth_modal(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.flags.auth_modal_open = true;
        self.flags.mobile_menu_open = false;
    }

    pub fn close_auth_modal(&mut self) {
        self.flags.auth_modal_open = false;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user_name: self.session.user.as_ref().map(|user| user.name.clone()),
            view: self.view,
            theme: self.theme_color(),
            flags: self.flags,
            auth_mode: self.auth_mode,
        }
    }
}

pub fn derive_theme_color(authenticated: bool, view: View) -> ThemeColor {
    if !authenticated {
        return ThemeColor::Emerald;
    }
    match view {
        View::Overview | View::Waste | View::Leaderboard => ThemeColor::Emerald,
        View::Energy => ThemeColor::Amber,
        View::Chat => ThemeColor::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> SessionController {
        let mut controller = SessionController::new();
        controller.login("Alex");
        controller
    }

    #[test]
    fn test_starts_signed_out_on_overview() {
        let controller = SessionController::new();
        assert!(!controller.is_authenticated());
        assert_eq!(controller.view(), View::Overview);
        assert_eq!(controller.flags(), UiFlags::default());
    }

    #[test]
    fn test_login_logout_scenario() {
        let mut controller = SessionController::new();

        let session = controller.login("Alex");
        assert_eq!(session.user.as_ref().map(|u| u.name.as_str()), Some("Alex"));
        assert_eq!(controller.view(), View::Overview);

        controller.navigate_to("energy");
        assert_eq!(controller.view(), View::Energy);
        assert_eq!(controller.theme_color().as_str(), "amber");

        controller.logout();
        assert!(controller.session().user.is_none());
        assert_eq!(controller.view(), View::Overview);
    }

    #[test]
    fn test_login_blank_name_uses_fallback() {
        let mut controller = SessionController::new();
        controller.login("");
        assert_eq!(controller.snapshot().user_name.as_deref(), Some("EcoWarrior"));

        controller.logout();
        controller.login("   ");
        assert_eq!(controller.snapshot().user_name.as_deref(), Some("EcoWarrior"));
    }

    #[test]
    fn test_login_resets_view_and_closes_modal() {
        let mut controller = SessionController::new();
        controller.open_auth_modal(AuthMode::Register);
        assert!(controller.flags().auth_modal_open);

        controller.login("Sam");
        assert!(!controller.flags().auth_modal_open);
        assert_eq!(controller.view(), View::Overview);
    }

    #[test]
    fn test_navigation_follows_last_valid_request() {
        let mut controller = signed_in();
        let requests = ["waste", "chat", "bogus", "leaderboard", "", "energy", "CHAT", "overview", "chat"];
        let mut expected = View::Overview;

        for id in requests {
            controller.navigate_to(id);
            if let Some(view) = View::from_id(id) {
                expected = view;
            }
            assert_eq!(controller.view(), expected, "after requesting {:?}", id);
        }
    }

    #[test]
    fn test_every_view_reachable_from_every_view() {
        let mut controller = signed_in();
        for from in View::ALL {
            for to in View::ALL {
                controller.navigate(from);
                controller.navigate(to);
                assert_eq!(controller.view(), to);
            }
        }
    }

    #[test]
    fn test_navigation_closes_mobile_menu() {
        let mut controller = signed_in();
        controller.toggle_mobile_menu();
        assert!(controller.flags().mobile_menu_open);

        controller.navigate(View::Waste);
        assert!(!controller.flags().mobile_menu_open);
    }

    #[test]
    fn test_invalid_navigation_keeps_menu_state() {
        let mut controller = signed_in();
        controller.navigate(View::Chat);
        controller.toggle_mobile_menu();

        controller.navigate_to("settings");
        assert_eq!(controller.view(), View::Chat);
        assert!(controller.flags().mobile_menu_open);
    }

    #[test]
    fn test_navigation_ignored_while_signed_out() {
        let mut controller = SessionController::new();
        controller.navigate(View::Energy);
        assert_eq!(controller.view(), View::Overview);
    }

    #[test]
    fn test_logout_closes_dropdown_and_menu() {
        let mut controller = signed_in();
        controller.navigate(View::Leaderboard);
        controller.toggle_user_dropdown();
        controller.toggle_mobile_menu();

        controller.logout();
        let flags = controller.flags();
        assert!(!flags.user_dropdown_open);
        assert!(!flags.mobile_menu_open);
        assert_eq!(controller.view(), View::Overview);
    }

    #[test]
    fn test_go_home_from_any_view() {
        let mut controller = signed_in();
        controller.navigate(View::Chat);
        controller.toggle_mobile_menu();

        controller.go_home();
        assert_eq!(controller.view(), View::Overview);
        assert!(!controller.flags().mobile_menu_open);
    }

    #[test]
    fn test_auth_modal_and_mobile_menu_are_exclusive() {
        let mut controller = signed_in();
        controller.toggle_mobile_menu();
        controller.open_auth_modal(AuthMode::Login);

        let flags = controller.flags();
        assert!(flags.auth_modal_open);
        assert!(!flags.mobile_menu_open);
        assert_eq!(controller.auth_mode(), AuthMode::Login);
    }

    #[test]
    fn test_mobile_menu_requires_session() {
        let mut controller = SessionController::new();
        controller.toggle_mobile_menu();
        assert!(!controller.flags().mobile_menu_open);
    }

    #[test]
    fn test_theme_color_is_pure() {
        for view in View::ALL {
            assert_eq!(derive_theme_color(false, view), ThemeColor::Emerald);
            assert_eq!(derive_theme_color(true, view), derive_theme_color(true, view));
        }
        assert_eq!(derive_theme_color(true, View::Energy).as_str(), "amber");
        assert_eq!(derive_theme_color(true, View::Chat).as_str(), "blue");
        assert_eq!(derive_theme_color(true, View::Waste).as_str(), "emerald");
        assert_eq!(derive_theme_color(true, View::Leaderboard).as_str(), "emerald");
        assert_eq!(derive_theme_color(true, View::Overview).as_str(), "emerald");
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut controller = signed_in();
        controller.navigate(View::Chat);
        let snapshot = controller.snapshot();

        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.view, View::Chat);
        assert_eq!(snapshot.theme, ThemeColor::Blue);
        assert_eq!(snapshot.user_name.as_deref(), Some("Alex"));
    }
}
