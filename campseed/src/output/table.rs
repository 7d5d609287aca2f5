use tabled::{Table, settings::Style};

/// Consistent styling for all tables printed by campseed
pub(crate) trait CampseedTable {
    fn styled(&mut self) -> &mut Self;
}

impl CampseedTable for Table {
    fn styled(&mut self) -> &mut Self {
        self.with(Style::psql())
    }
}
