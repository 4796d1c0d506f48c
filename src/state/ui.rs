//! Shell chrome state: which top-level screen is mounted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level screens selectable from the shell header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Document upload and the ingestion inventory.
    Ingestion,
    /// Keyword search across the processed archive.
    #[default]
    Dashboard,
    /// Multi-decade concept synthesis.
    Synthesis,
}

impl ActiveTab {
    /// All tabs in header order.
    pub const ALL: [Self; 3] = [Self::Ingestion, Self::Dashboard, Self::Synthesis];

    /// Header button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ingestion => "Data Ingestion",
            Self::Dashboard => "Research Dashboard",
            Self::Synthesis => "Research Synthesis",
        }
    }
}
