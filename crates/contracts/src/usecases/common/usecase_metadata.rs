/// Метаданные UseCase для идентификации и вывода в логах/CLI
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u510")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "analyze_sales")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u510_analyze_sales"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
