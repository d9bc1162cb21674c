use crate::api::Employee;
use crate::listing::Filterable;

pub const STATUS_OPTIONS: [&str; 3] = ["Active", "Inactive", "On Leave"];

impl Filterable for Employee {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.employee_name.as_deref(),
            self.designation.as_deref(),
            self.department.as_deref(),
            self.employee_id.as_deref(),
        ]
    }

    fn status_value(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

pub fn initials(name: Option<&str>) -> String {
    name.unwrap_or_default()
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
