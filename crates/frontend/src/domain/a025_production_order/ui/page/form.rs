use crate::shared::date_utils::date_to_iso_utc;
use contracts::domain::a025_production_order::aggregate::CreateProductionOrderDto;
use leptos::prelude::*;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductionOrderFormValues {
    pub reference: String,
    pub product: String,
    pub quantity: String,
    /// yyyy-mm-dd from the date picker
    pub due_date: String,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub reference: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub due_date: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.reference.is_none()
            && self.product.is_none()
            && self.quantity.is_none()
            && self.due_date.is_none()
    }
}

impl ProductionOrderFormValues {
    /// Apply field rules and build the creation payload
    pub fn to_dto(&self) -> Result<CreateProductionOrderDto, FormErrors> {
        let mut errors = FormErrors::default();

        let reference = self.reference.trim();
        if reference.is_empty() {
            errors.reference = Some("Reference is required".to_string());
        }

        let product = self.product.trim();
        if product.is_empty() {
            errors.product = Some("Product is required".to_string());
        }

        let quantity = match self.quantity.trim() {
            "" => {
                errors.quantity = Some("Quantity is required".to_string());
                None
            }
            raw => match raw.parse::<i64>() {
                Ok(q) if q >= 1 => Some(q),
                Ok(_) => {
                    errors.quantity = Some("Quantity must be at least 1".to_string());
                    None
                }
                Err(_) => {
                    errors.quantity = Some("Quantity must be a whole number".to_string());
                    None
                }
            },
        };

        let due_date = if self.due_date.trim().is_empty() {
            errors.due_date = Some("Due date is required".to_string());
            None
        } else {
            match date_to_iso_utc(&self.due_date) {
                Ok(iso) => Some(iso),
                Err(_) => {
                    errors.due_date = Some("Due date is not a valid date".to_string());
                    None
                }
            }
        };

        match (quantity, due_date) {
            (Some(quantity), Some(due_date)) if errors.is_empty() => Ok(CreateProductionOrderDto {
                reference: reference.to_string(),
                product: product.to_string(),
                quantity,
                due_date,
            }),
            _ => Err(errors),
        }
    }
}

/// Form state owned by the page
#[derive(Clone, Copy)]
pub struct ProductionOrderForm {
    pub reference: RwSignal<String>,
    pub product: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub due_date: RwSignal<String>,
    pub errors: RwSignal<FormErrors>,
}

impl ProductionOrderForm {
    pub fn new() -> Self {
        Self {
            reference: RwSignal::new(String::new()),
            product: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
            errors: RwSignal::new(FormErrors::default()),
        }
    }

    pub fn values(&self) -> ProductionOrderFormValues {
        ProductionOrderFormValues {
            reference: self.reference.get_untracked(),
            product: self.product.get_untracked(),
            quantity: self.quantity.get_untracked(),
            due_date: self.due_date.get_untracked(),
        }
    }

    pub fn set_values(&self, values: ProductionOrderFormValues) {
        self.reference.set(values.reference);
        self.product.set(values.product);
        self.quantity.set(values.quantity);
        self.due_date.set(values.due_date);
    }

    /// Clear every field and all errors
    pub fn reset(&self) {
        self.set_values(ProductionOrderFormValues::default());
        self.errors.set(FormErrors::default());
    }

    /// Validate current values, recording field errors on the form
    pub fn validate(&self) -> Result<CreateProductionOrderDto, FormErrors> {
        let result = self.values().to_dto();
        match &result {
            Ok(_) => self.errors.set(FormErrors::default()),
            Err(errors) => self.errors.set(errors.clone()),
        }
        result
    }
}

impl Default for ProductionOrderForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductionOrderFormValues {
        ProductionOrderFormValues {
            reference: "REF-001".into(),
            product: "Widget".into(),
            quantity: "10".into(),
            due_date: "2025-12-31".into(),
        }
    }

    #[test]
    fn test_valid_values_build_payload() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.reference, "REF-001");
        assert_eq!(dto.product, "Widget");
        assert_eq!(dto.quantity, 10);
        assert_eq!(dto.due_date, "2025-12-31T00:00:00.000Z");
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let values = ProductionOrderFormValues {
            reference: "  REF-002 ".into(),
            product: "\tGear\n".into(),
            ..filled()
        };
        let dto = values.to_dto().unwrap();
        assert_eq!(dto.reference, "REF-002");
        assert_eq!(dto.product, "Gear");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ProductionOrderFormValues::default().to_dto().unwrap_err();
        assert_eq!(errors.reference.as_deref(), Some("Reference is required"));
        assert_eq!(errors.product.as_deref(), Some("Product is required"));
        assert_eq!(errors.quantity.as_deref(), Some("Quantity is required"));
        assert_eq!(errors.due_date.as_deref(), Some("Due date is required"));
    }

    #[test]
    fn test_blank_reference_is_missing() {
        let values = ProductionOrderFormValues {
            reference: "   ".into(),
            ..filled()
        };
        let errors = values.to_dto().unwrap_err();
        assert!(errors.reference.is_some());
        assert!(errors.product.is_none());
    }

    #[test]
    fn test_quantity_rules() {
        for (raw, expected) in [
            ("0", "Quantity must be at least 1"),
            ("-3", "Quantity must be at least 1"),
            ("2.5", "Quantity must be a whole number"),
            ("ten", "Quantity must be a whole number"),
        ] {
            let values = ProductionOrderFormValues {
                quantity: raw.into(),
                ..filled()
            };
            let errors = values.to_dto().unwrap_err();
            assert_eq!(errors.quantity.as_deref(), Some(expected), "input {raw:?}");
        }

        let values = ProductionOrderFormValues {
            quantity: "1".into(),
            ..filled()
        };
        assert_eq!(values.to_dto().unwrap().quantity, 1);
    }

    #[test]
    fn test_unparseable_due_date() {
        let values = ProductionOrderFormValues {
            due_date: "2025-13-01".into(),
            ..filled()
        };
        let errors = values.to_dto().unwrap_err();
        assert_eq!(errors.due_date.as_deref(), Some("Due date is not a valid date"));
    }

    #[test]
    fn test_validate_records_errors_and_keeps_values() {
        let form = ProductionOrderForm::new();
        form.set_values(ProductionOrderFormValues {
            product: String::new(),
            ..filled()
        });

        assert!(form.validate().is_err());
        assert!(form.errors.get_untracked().product.is_some());
        assert_eq!(form.values().reference, "REF-001");

        form.product.set("Widget".into());
        assert!(form.validate().is_ok());
        assert!(form.errors.get_untracked().is_empty());
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let form = ProductionOrderForm::new();
        form.set_values(ProductionOrderFormValues {
            quantity: "0".into(),
            ..filled()
        });
        let _ = form.validate();

        form.reset();

        assert_eq!(form.values(), ProductionOrderFormValues::default());
        assert!(form.errors.get_untracked().is_empty());
    }
}
