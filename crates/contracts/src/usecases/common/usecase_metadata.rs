/// Identification of a use case for logs and page titles
pub trait UseCaseMetadata {
    /// Index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "create_account"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u001_create_account"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
