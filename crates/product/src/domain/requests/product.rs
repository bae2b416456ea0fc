use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        required(message = "Product name is required"),
        length(min = 1, message = "Product name is required")
    )]
    #[schema(example = "Tablet")]
    pub name: Option<String>,

    #[schema(example = 600)]
    pub price: Option<f64>,

    #[schema(example = 8)]
    pub stock: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    #[schema(example = "Laptop")]
    pub name: Option<String>,

    #[schema(example = 1200)]
    pub price: Option<f64>,

    #[schema(example = 3)]
    pub stock: Option<i32>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

/// A create request that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl NewProduct {
    /// Checks a create body. `None` means the client sent no data at all;
    /// a body with keys but no usable `name` is a missing name instead.
    pub fn from_request(req: Option<&CreateProductRequest>) -> Result<Self, ServiceError> {
        let Some(req) = req else {
            return Err(ServiceError::Validation("Product data is missing".into()));
        };

        req.validate()
            .map_err(|e| ServiceError::Validation(first_validation_message(&e)))?;

        let Some(name) = req.name.clone() else {
            return Err(ServiceError::Validation("Product name is required".into()));
        };

        Ok(NewProduct {
            name,
            price: req.price.unwrap_or_default(),
            stock: req.stock.unwrap_or_default(),
        })
    }
}

pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field.clone(), e)))
        .next()
        .map(|(field, e)| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"))
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ServiceError) -> String {
        match err {
            ServiceError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn absent_create_body_is_missing_data() {
        let err = NewProduct::from_request(None).unwrap_err();
        assert_eq!(message(err), "Product data is missing");
    }

    #[test]
    fn body_without_known_fields_requires_name() {
        let err = NewProduct::from_request(Some(&CreateProductRequest::default())).unwrap_err();
        assert_eq!(message(err), "Product name is required");
    }

    #[test]
    fn create_without_name_requires_name() {
        let req = CreateProductRequest {
            name: None,
            price: Some(600.0),
            stock: Some(8),
        };
        let err = NewProduct::from_request(Some(&req)).unwrap_err();
        assert_eq!(message(err), "Product name is required");
    }

    #[test]
    fn create_with_blank_name_requires_name() {
        let req = CreateProductRequest {
            name: Some(String::new()),
            price: Some(600.0),
            stock: None,
        };
        let err = NewProduct::from_request(Some(&req)).unwrap_err();
        assert_eq!(message(err), "Product name is required");
    }

    #[test]
    fn create_fills_missing_numbers_with_zero() {
        let req = CreateProductRequest {
            name: Some("Cable".into()),
            price: None,
            stock: None,
        };
        let new = NewProduct::from_request(Some(&req)).unwrap();
        assert_eq!(
            new,
            NewProduct {
                name: "Cable".into(),
                price: 0.0,
                stock: 0,
            }
        );
    }

    #[test]
    fn update_rejects_empty_name() {
        let req = UpdateProductRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "Product name cannot be empty"
        );
    }

    #[test]
    fn update_emptiness_ignores_unknown_fields() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"colour":"red"}"#).unwrap();
        assert!(req.is_empty());
    }
}
