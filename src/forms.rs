use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self { field, message: "This field is required." }
    }
}

pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.field == field)
}

/// Raw edit-form submission. Fields stay optional strings so a missing or
/// empty field re-renders with an inline message instead of failing
/// extraction.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    pub new_rating: Option<String>,
    pub new_review: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditValues {
    pub rating: f64,
    pub review: String,
}

impl EditForm {
    pub fn validate(&self) -> Result<EditValues, Vec<FieldError>> {
        let mut errors = Vec::new();

        let rating = match self.new_rating.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::required("new_rating"));
                None
            }
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.push(FieldError {
                        field: "new_rating",
                        message: "Must be a number.",
                    });
                    None
                }
            },
        };

        let review = match self.new_review.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::required("new_review"));
                None
            }
            Some(text) => Some(text.to_string()),
        };

        match (rating, review) {
            (Some(rating), Some(review)) => Ok(EditValues { rating, review }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    pub movie_title: Option<String>,
}

impl AddForm {
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        match self.movie_title.as_deref().map(str::trim) {
            None | Some("") => Err(vec![FieldError::required("movie_title")]),
            Some(title) => Ok(title.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_edit_form_yields_typed_values() {
        let form = EditForm {
            new_rating: Some("8.5".to_string()),
            new_review: Some(" Great. ".to_string()),
        };
        let values = form.validate().unwrap();
        assert_eq!(values, EditValues { rating: 8.5, review: "Great.".to_string() });
    }

    #[test]
    fn missing_edit_fields_report_each_field() {
        let form = EditForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(error_for(&errors, "new_rating").is_some());
        assert!(error_for(&errors, "new_review").is_some());
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let form = EditForm {
            new_rating: Some("ten".to_string()),
            new_review: Some("fine".to_string()),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError { field: "new_rating", message: "Must be a number." }]);
    }

    #[test]
    fn zero_rating_is_accepted() {
        let form = EditForm {
            new_rating: Some("0".to_string()),
            new_review: Some("not for me".to_string()),
        };
        assert_eq!(form.validate().unwrap().rating, 0.0);
    }

    #[test]
    fn add_form_requires_a_title() {
        assert!(AddForm::default().validate().is_err());
        assert!(AddForm { movie_title: Some("   ".to_string()) }.validate().is_err());
        assert_eq!(
            AddForm { movie_title: Some(" Matrix ".to_string()) }.validate().unwrap(),
            "Matrix"
        );
    }
}
