/// Messages reported by the registration schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    pub username_required: String,
    pub username_min_length: String,
    pub username_max_length: String,
    pub username_pattern: String,
    pub user_id_required: String,
    pub user_id_pattern: String,
    pub password_required: String,
    pub password_min_length: String,
    pub password_max_length: String,
    pub password_pattern: String,
    pub confirm_password_required: String,
    pub password_mismatch: String,
    pub email_pattern: String,
    pub phone_pattern: String,
    pub avatar_not_image: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            username_required: "이름이 필요합니다.".to_string(),
            username_min_length: "이름은 최소 2자리 이상이여야 합니다.".to_string(),
            username_max_length: "이름의 최대길이는 15자리 입니다.".to_string(),
            username_pattern: "이름은 기호를 제외한 한글 또는 영어를 사용할 수 있습니다."
                .to_string(),
            user_id_required: "아이디가 필요합니다.".to_string(),
            user_id_pattern:
                "아이디는 기호를 제외한 영문자 또는 6~20자리 숫자를 포함해야합니다.".to_string(),
            password_required: "비밀번호가 필요합니다.".to_string(),
            password_min_length: "비밀번호는 최소 8자리여야 합니다.".to_string(),
            password_max_length: "비밀번호는 최대 16자리여야 합니다.".to_string(),
            password_pattern:
                "비밀번호는 최소 1개이상의 숫자, 문자, 정의된 특수문자를 포함해야 합니다."
                    .to_string(),
            confirm_password_required: "재확인 비밀번호가 필요합니다.".to_string(),
            password_mismatch: "비밀번호가 일치하지 않습니다.".to_string(),
            email_pattern: "이메일 형식이 올바르지 않습니다.".to_string(),
            phone_pattern: "휴대폰 입력이 올바르지 않습니다.".to_string(),
            avatar_not_image: "이미지 파일만 업로드할 수 있습니다.".to_string(),
        }
    }
}
