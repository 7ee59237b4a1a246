use crate::domain::{
    error::DomainError,
    validation::{Field, FieldRule, FormSchema, ValidationMessages},
};

const USERNAME_PATTERN: &str = r"^[a-zA-Zㄱ-힣 ]{2,15}$";
const USER_ID_PATTERN: &str = r"^[a-z][a-z0-9]{5,19}$";
const PASSWORD_SPECIALS: &str = r"[~!@#$%^&*()+|=]";
const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9~!@#$%^&*()+|=]{8,16}$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$";
const PHONE_PATTERN: &str = r"^01[016789]-?[0-9]{3,4}-?[0-9]{4}$";

impl FormSchema {
    /// Rules of the registration page
    pub fn join(messages: &ValidationMessages) -> Result<Self, DomainError> {
        let rules = vec![
            FieldRule::new(Field::Username)
                .strip_whitespace()
                .required(&messages.username_required)
                .min_length(2, &messages.username_min_length)
                .max_length(15, &messages.username_max_length)
                .pattern(USERNAME_PATTERN, &messages.username_pattern)?,
            FieldRule::new(Field::UserId)
                .required(&messages.user_id_required)
                .pattern(USER_ID_PATTERN, &messages.user_id_pattern)?,
            FieldRule::new(Field::Password)
                .required(&messages.password_required)
                .min_length(8, &messages.password_min_length)
                .max_length(16, &messages.password_max_length)
                .pattern(PASSWORD_PATTERN, &messages.password_pattern)?
                .must_contain("[A-Za-z]")?
                .must_contain("[0-9]")?
                .must_contain(PASSWORD_SPECIALS)?,
            FieldRule::new(Field::ConfirmPassword).required(&messages.confirm_password_required),
            FieldRule::new(Field::Email).pattern(EMAIL_PATTERN, &messages.email_pattern)?,
            FieldRule::new(Field::Phone).pattern(PHONE_PATTERN, &messages.phone_pattern)?,
            FieldRule::new(Field::Location),
        ];

        Ok(FormSchema::new(rules).image_avatar(&messages.avatar_not_image))
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::domain::models::join_form::{AvatarFile, JoinForm};

    #[fixture]
    fn schema() -> FormSchema {
        FormSchema::join(&ValidationMessages::default()).unwrap()
    }

    fn check(schema: &FormSchema, field: Field, value: &str) -> Result<(), String> {
        let rule = schema.rule(field).unwrap();
        rule.check(&rule.normalize(value))
    }

    fn valid_form() -> JoinForm {
        JoinForm {
            username: "홍길동".to_string(),
            user_id: "gildong1".to_string(),
            password: "Abcdefg1!".to_string(),
            confirm_password: "Abcdefg1!".to_string(),
            ..JoinForm::default()
        }
    }

    #[rstest]
    #[case("abcde1", true)]
    #[case("abc12", false)]
    #[case("1abcdef", false)]
    #[case("Abcdef1", false)]
    #[case("abcdefghij0123456789", true)]
    #[case("abcdefghij01234567890", false)]
    fn user_id_pattern(schema: FormSchema, #[case] value: &str, #[case] ok: bool) {
        assert_eq!(check(&schema, Field::UserId, value).is_ok(), ok, "{value}");
    }

    #[rstest]
    #[case("Abcdefg1!", true)]
    #[case("abcdefgh", false)]
    #[case("abcdefg1", false)]
    #[case("!!!!!!!1", false)]
    #[case("Abcdefg1?", false)]
    #[case("Ab1!", false)]
    #[case("Abcdefghijklmn1!x", false)]
    fn password_pattern(schema: FormSchema, #[case] value: &str, #[case] ok: bool) {
        assert_eq!(check(&schema, Field::Password, value).is_ok(), ok, "{value}");
    }

    #[rstest]
    fn password_length_messages(schema: FormSchema) {
        let messages = ValidationMessages::default();
        assert_eq!(
            check(&schema, Field::Password, "Ab1!"),
            Err(messages.password_min_length)
        );
        assert_eq!(
            check(&schema, Field::Password, "Abcdefghijklmn1!x"),
            Err(messages.password_max_length)
        );
    }

    #[rstest]
    #[case("   ")]
    #[case(" !@# ")]
    #[case("$$")]
    fn username_without_letters_is_rejected(schema: FormSchema, #[case] value: &str) {
        assert!(check(&schema, Field::Username, value).is_err());
    }

    #[rstest]
    fn username_spaces_are_stripped(schema: FormSchema) {
        let form = JoinForm {
            username: "홍 길 동".to_string(),
            ..valid_form()
        };
        let validated = schema.validate(&form).unwrap();
        assert_eq!(validated.form().username, "홍길동");
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last-1@mail.co.kr", true)]
    #[case("user@example", false)]
    #[case("user@@example.com", false)]
    fn email_pattern(schema: FormSchema, #[case] value: &str, #[case] ok: bool) {
        assert_eq!(check(&schema, Field::Email, value).is_ok(), ok, "{value}");
    }

    #[rstest]
    #[case("010-1234-5678", true)]
    #[case("01012345678", true)]
    #[case("011-123-4567", true)]
    #[case("012-1234-5678", false)]
    #[case("02-1234-5678", false)]
    fn phone_pattern(schema: FormSchema, #[case] value: &str, #[case] ok: bool) {
        assert_eq!(check(&schema, Field::Phone, value).is_ok(), ok, "{value}");
    }

    #[rstest]
    fn optional_fields_may_be_empty(schema: FormSchema) {
        assert!(schema.validate(&valid_form()).is_ok());
    }

    #[rstest]
    fn empty_form_reports_every_required_field(schema: FormSchema) {
        let errors = schema.validate(&JoinForm::default()).unwrap_err();
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                Field::Username,
                Field::UserId,
                Field::Password,
                Field::ConfirmPassword
            ]
        );
    }

    #[rstest]
    fn avatar_must_be_an_image(schema: FormSchema) {
        let form = JoinForm {
            avatar: Some(AvatarFile::new(
                "notes.txt",
                mime::TEXT_PLAIN,
                b"hello".to_vec(),
            )),
            ..valid_form()
        };
        let errors = schema.validate(&form).unwrap_err();
        assert_eq!(
            errors[&Field::Avatar],
            ValidationMessages::default().avatar_not_image
        );
    }
}
