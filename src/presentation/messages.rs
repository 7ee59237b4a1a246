use crate::domain::validation::Field;

/// Page-level text of the registration view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub loading: String,
    pub submit: String,
    pub network_error: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: "회원가입".to_string(),
            loading: "로딩중...".to_string(),
            submit: "회원가입".to_string(),
            network_error: "요청을 처리하는 중 문제가 발생했습니다. 잠시 후 다시 시도해주세요."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    /// Image file picker
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

pub static JOIN_FIELDS: [FieldDescriptor; 8] = [
    FieldDescriptor {
        field: Field::Avatar,
        label: "프로필 사진",
        placeholder: "",
        kind: InputKind::Image,
    },
    FieldDescriptor {
        field: Field::Username,
        label: "이름",
        placeholder: "이름을 입력해주세요.",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        field: Field::UserId,
        label: "아이디",
        placeholder: "아이디를 입력해주세요.",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        field: Field::Password,
        label: "비밀번호",
        placeholder: "비밀번호를 입력해주세요.",
        kind: InputKind::Password,
    },
    FieldDescriptor {
        field: Field::ConfirmPassword,
        label: "비밀번호 재입력",
        placeholder: "비밀번호를 다시한번 입력해주세요.",
        kind: InputKind::Password,
    },
    FieldDescriptor {
        field: Field::Email,
        label: "이메일",
        placeholder: "이메일을 입력해주세요.",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        field: Field::Phone,
        label: "휴대폰 번호",
        placeholder: "휴대폰 번호를 입력해주세요.",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        field: Field::Location,
        label: "거주지",
        placeholder: "위치를 입력해주세요.",
        kind: InputKind::Text,
    },
];

pub fn descriptor(field: Field) -> Option<&'static FieldDescriptor> {
    JOIN_FIELDS.iter().find(|descriptor| descriptor.field == field)
}
