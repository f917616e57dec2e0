/// Top-level content panels an authenticated session can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Overview,
    Waste,
    Energy,
    Leaderboard,
    Chat,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Waste,
        View::Energy,
        View::Leaderboard,
        View::Chat,
    ];

    pub fn id(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Waste => "waste",
            View::Energy => "energy",
            View::Leaderboard => "leaderboard",
            View::Chat => "chat",
        }
    }

    /// Resolves a view identifier; anything outside the five panels is `None`.
    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.id() == id)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
