pub mod analysis;
pub mod notifications;
pub mod theme;

pub use analysis::{provide_analysis_context, use_analysis, AnalysisContext, AnalysisPhase};
pub use notifications::{provide_notifications, use_notifications, Notifications};
pub use theme::{provide_theme_context, use_theme, Theme, ThemeContext};
