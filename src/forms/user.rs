//! Request bodies for profile edits and admin account management.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{Gender, Role, UserEmail, UserId, UserName};
use crate::domain::user::{NewUser, UpdateUser, UpdateUserProfile};
use crate::forms::{FormError, field_error, optional_field};

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileForm {
    pub name: Option<String>,
    pub gender: Option<String>,
}

impl TryFrom<UpdateProfileForm> for UpdateUserProfile {
    type Error = FormError;

    fn try_from(form: UpdateProfileForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form
                .name
                .map(UserName::new)
                .transpose()
                .map_err(field_error("name"))?,
            gender: optional_field(form.gender, "gender", Gender::new)?,
        })
    }
}

/// Body for creating an account by hand. The id must match the subject the
/// authentication service issues for this user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserForm {
    #[validate(range(min = 1))]
    pub id: i32,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
}

impl TryFrom<CreateUserForm> for NewUser {
    type Error = FormError;

    fn try_from(form: CreateUserForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let role = match form.role {
            Some(role) => role.parse::<Role>().map_err(field_error("role"))?,
            None => Role::default(),
        };

        Ok(Self {
            gender: optional_field(form.gender, "gender", Gender::new)?,
            is_approved: form.is_approved,
            ..NewUser::new(
                UserId::new(form.id).map_err(field_error("id"))?,
                UserEmail::new(form.email).map_err(field_error("email"))?,
                UserName::new(form.name).map_err(field_error("name"))?,
                role,
            )
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Partial account update; absent keys leave the stored values untouched.
pub struct UpdateUserForm {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub role: Option<String>,
    pub is_approved: Option<bool>,
}

impl TryFrom<UpdateUserForm> for UpdateUser {
    type Error = FormError;

    fn try_from(form: UpdateUserForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form
                .name
                .map(UserName::new)
                .transpose()
                .map_err(field_error("name"))?,
            gender: optional_field(form.gender, "gender", Gender::new)?,
            role: form
                .role
                .map(|role| role.parse::<Role>())
                .transpose()
                .map_err(field_error("role"))?,
            is_approved: form.is_approved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form() -> CreateUserForm {
        CreateUserForm {
            id: 12,
            email: "New.Styler@Example.com".into(),
            name: "New Styler".into(),
            role: None,
            gender: Some("Female".into()),
            is_approved: true,
        }
    }

    #[test]
    fn created_accounts_default_to_styler() {
        let user = NewUser::try_from(create_form()).unwrap();
        assert_eq!(user.id.get(), 12);
        assert_eq!(user.email.as_str(), "new.styler@example.com");
        assert_eq!(user.role, Role::Styler);
        assert_eq!(user.gender.unwrap().as_str(), "female");
        assert!(user.is_approved);
    }

    #[test]
    fn unknown_roles_are_rejected() {
        let form = CreateUserForm {
            role: Some("root".into()),
            ..create_form()
        };
        assert!(matches!(
            NewUser::try_from(form),
            Err(FormError::InvalidField { field: "role", .. })
        ));

        let form = UpdateUserForm {
            role: Some("guest".into()),
            ..Default::default()
        };
        assert!(UpdateUser::try_from(form).is_err());
    }

    #[test]
    fn non_positive_ids_fail_validation() {
        let form = CreateUserForm {
            id: 0,
            ..create_form()
        };
        assert!(matches!(
            NewUser::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn role_names_are_case_insensitive() {
        let form = UpdateUserForm {
            role: Some("Partner".into()),
            is_approved: Some(true),
            ..Default::default()
        };
        let update = UpdateUser::try_from(form).unwrap();
        assert_eq!(update.role, Some(Role::Partner));
        assert_eq!(update.is_approved, Some(true));
    }
}
