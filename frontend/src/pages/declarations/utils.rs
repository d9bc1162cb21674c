use crate::api::{Address, ApiError, Declaration, DeductionItem, HousingLoan, PersonalDetails};
use crate::components::forms::{format_date_input, parse_amount_input, parse_date_input};
use leptos::*;

pub const DEDUCTION_SECTIONS: [&str; 5] = ["80C", "80D", "80E", "80G", "80TTA"];

fn optional_string(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn amount_text(amount: Option<f64>) -> String {
    amount.map(|value| value.to_string()).unwrap_or_default()
}

fn is_pan(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

#[derive(Clone, Copy)]
pub struct PersonalFormState {
    pub employee_id: RwSignal<String>,
    pub employee_name: RwSignal<String>,
    pub pan: RwSignal<String>,
    pub date_of_birth: RwSignal<String>,
    pub financial_year: RwSignal<String>,
}

impl PersonalFormState {
    fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            employee_name: create_rw_signal(String::new()),
            pan: create_rw_signal(String::new()),
            date_of_birth: create_rw_signal(String::new()),
            financial_year: create_rw_signal(String::new()),
        }
    }

    fn fill(&self, details: &PersonalDetails) {
        self.employee_id
            .set(details.employee_id.clone().unwrap_or_default());
        self.employee_name
            .set(details.employee_name.clone().unwrap_or_default());
        self.pan.set(details.pan.clone().unwrap_or_default());
        self.date_of_birth
            .set(details.date_of_birth.map(format_date_input).unwrap_or_default());
        self.financial_year
            .set(details.financial_year.clone().unwrap_or_default());
    }

    fn to_details(&self) -> Result<PersonalDetails, String> {
        let employee_id = optional_string(self.employee_id.get_untracked())
            .ok_or_else(|| "Employee ID is required.".to_string())?;
        let pan = optional_string(self.pan.get_untracked()).map(|pan| pan.to_uppercase());
        if let Some(pan) = pan.as_deref() {
            if !is_pan(pan) {
                return Err("PAN must look like ABCDE1234F.".into());
            }
        }
        Ok(PersonalDetails {
            employee_id: Some(employee_id),
            employee_name: optional_string(self.employee_name.get_untracked()),
            pan,
            date_of_birth: parse_date_input(&self.date_of_birth.get_untracked(), "Date of birth")?,
            financial_year: optional_string(self.financial_year.get_untracked()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct AddressFormState {
    pub line1: RwSignal<String>,
    pub line2: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub postal_code: RwSignal<String>,
}

impl AddressFormState {
    fn new() -> Self {
        Self {
            line1: create_rw_signal(String::new()),
            line2: create_rw_signal(String::new()),
            city: create_rw_signal(String::new()),
            state: create_rw_signal(String::new()),
            postal_code: create_rw_signal(String::new()),
        }
    }

    fn fill(&self, address: &Address) {
        self.line1.set(address.line1.clone().unwrap_or_default());
        self.line2.set(address.line2.clone().unwrap_or_default());
        self.city.set(address.city.clone().unwrap_or_default());
        self.state.set(address.state.clone().unwrap_or_default());
        self.postal_code
            .set(address.postal_code.clone().unwrap_or_default());
    }

    fn to_address(&self) -> Address {
        Address {
            line1: optional_string(self.line1.get_untracked()),
            line2: optional_string(self.line2.get_untracked()),
            city: optional_string(self.city.get_untracked()),
            state: optional_string(self.state.get_untracked()),
            postal_code: optional_string(self.postal_code.get_untracked()),
        }
    }
}

/// One editable deduction line. `id` only keys the row in the list.
#[derive(Clone, Copy)]
pub struct DeductionRow {
    pub id: u64,
    pub section: RwSignal<String>,
    pub description: RwSignal<String>,
    pub amount: RwSignal<String>,
}

impl DeductionRow {
    fn new(id: u64, item: &DeductionItem) -> Self {
        Self {
            id,
            section: create_rw_signal(item.section.clone().unwrap_or_default()),
            description: create_rw_signal(item.description.clone().unwrap_or_default()),
            amount: create_rw_signal(amount_text(item.amount)),
        }
    }

    fn is_blank(&self) -> bool {
        self.section.get_untracked().trim().is_empty()
            && self.description.get_untracked().trim().is_empty()
            && self.amount.get_untracked().trim().is_empty()
    }

    fn to_item(&self, position: usize) -> Result<DeductionItem, String> {
        let label = format!("Deduction {}", position);
        let section = optional_string(self.section.get_untracked())
            .ok_or_else(|| format!("{}: section is required.", label))?;
        let amount = parse_amount_input(&self.amount.get_untracked(), &format!("{} amount", label))?
            .ok_or_else(|| format!("{}: amount is required.", label))?;
        Ok(DeductionItem {
            section: Some(section),
            description: optional_string(self.description.get_untracked()),
            amount: Some(amount),
        })
    }
}

#[derive(Clone, Copy)]
pub struct HousingLoanFormState {
    pub lender_name: RwSignal<String>,
    pub principal: RwSignal<String>,
    pub interest: RwSignal<String>,
    pub possession_date: RwSignal<String>,
}

impl HousingLoanFormState {
    fn new() -> Self {
        Self {
            lender_name: create_rw_signal(String::new()),
            principal: create_rw_signal(String::new()),
            interest: create_rw_signal(String::new()),
            possession_date: create_rw_signal(String::new()),
        }
    }

    fn fill(&self, loan: Option<&HousingLoan>) {
        let loan = loan.cloned().unwrap_or_default();
        self.lender_name.set(loan.lender_name.unwrap_or_default());
        self.principal.set(amount_text(loan.principal));
        self.interest.set(amount_text(loan.interest));
        self.possession_date
            .set(loan.possession_date.map(format_date_input).unwrap_or_default());
    }

    /// A fully blank section means no housing loan.
    fn to_loan(&self) -> Result<Option<HousingLoan>, String> {
        let loan = HousingLoan {
            lender_name: optional_string(self.lender_name.get_untracked()),
            principal: parse_amount_input(&self.principal.get_untracked(), "Loan principal")?,
            interest: parse_amount_input(&self.interest.get_untracked(), "Loan interest")?,
            possession_date: parse_date_input(
                &self.possession_date.get_untracked(),
                "Possession date",
            )?,
        };
        if loan == HousingLoan::default() {
            return Ok(None);
        }
        if loan.lender_name.is_none() {
            return Err("Lender name is required for a housing loan.".into());
        }
        Ok(Some(loan))
    }
}

/// The whole declaration held as strings while being edited.
#[derive(Clone, Copy)]
pub struct DeclarationFormState {
    pub personal: PersonalFormState,
    pub address: AddressFormState,
    pub housing_loan: HousingLoanFormState,
    deductions: RwSignal<Vec<DeductionRow>>,
    next_row: StoredValue<u64>,
}

impl Default for DeclarationFormState {
    fn default() -> Self {
        Self {
            personal: PersonalFormState::new(),
            address: AddressFormState::new(),
            housing_loan: HousingLoanFormState::new(),
            deductions: create_rw_signal(Vec::new()),
            next_row: store_value(0),
        }
    }
}

impl DeclarationFormState {
    pub fn deductions(&self) -> Signal<Vec<DeductionRow>> {
        self.deductions.into()
    }

    fn new_row(&self, item: &DeductionItem) -> DeductionRow {
        let id = self.next_row.get_value();
        self.next_row.set_value(id + 1);
        DeductionRow::new(id, item)
    }

    pub fn add_deduction(&self) {
        let row = self.new_row(&DeductionItem::default());
        self.deductions.update(|rows| rows.push(row));
    }

    pub fn remove_deduction(&self, id: u64) {
        self.deductions.update(|rows| rows.retain(|row| row.id != id));
    }

    /// Replaces every field with the stored declaration.
    pub fn fill(&self, declaration: &Declaration) {
        self.personal.fill(&declaration.personal_details);
        self.address.fill(&declaration.address);
        self.housing_loan.fill(declaration.housing_loan.as_ref());
        let rows = declaration
            .deductions
            .iter()
            .map(|item| self.new_row(item))
            .collect();
        self.deductions.set(rows);
    }

    /// Clears the form for an employee with nothing on file.
    pub fn start_blank(&self, employee_id: &str) {
        self.fill(&Declaration::default());
        self.personal.employee_id.set(employee_id.to_string());
    }

    pub fn to_declaration(&self) -> Result<Declaration, ApiError> {
        self.collect().map_err(ApiError::validation)
    }

    fn collect(&self) -> Result<Declaration, String> {
        let personal_details = self.personal.to_details()?;
        let deductions = self
            .deductions
            .get_untracked()
            .iter()
            .filter(|row| !row.is_blank())
            .enumerate()
            .map(|(index, row)| row.to_item(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Declaration {
            personal_details,
            address: self.address.to_address(),
            deductions,
            housing_loan: self.housing_loan.to_loan()?,
        })
    }
}

pub fn deduction_total(declaration: &Declaration) -> f64 {
    declaration
        .deductions
        .iter()
        .filter_map(|item| item.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_shape() {
        assert!(is_pan("ABCDE1234F"));
        assert!(!is_pan("ABCDE1234"));
        assert!(!is_pan("abcde1234f"));
        assert!(!is_pan("ABCD12345F"));
    }

    #[test]
    fn total_ignores_missing_amounts() {
        let declaration = Declaration {
            deductions: vec![
                DeductionItem {
                    amount: Some(150000.0),
                    ..DeductionItem::default()
                },
                DeductionItem::default(),
                DeductionItem {
                    amount: Some(25000.5),
                    ..DeductionItem::default()
                },
            ],
            ..Declaration::default()
        };
        assert_eq!(deduction_total(&declaration), 175000.5);
    }
}
