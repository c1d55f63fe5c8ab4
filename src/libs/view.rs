use crate::api::clickup::RegistrationResult;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn results(results: &[RegistrationResult]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "STATUS CODE", "MESSAGE"]);
        for (index, result) in results.iter().enumerate() {
            table.add_row(row![index + 1, result.status_code, result.message]);
        }
        table.printstd();

        Ok(())
    }
}
