use chrono::NaiveDate;
use flowfirmer_backend::entities::{document, document_tag, free_record_scheme, tag, term, user};
use sea_orm::{ActiveValue::NotSet, Set};

pub fn user() -> user::ActiveModel {
    user::ActiveModel {
        id: NotSet,
        name: Set("Test User".to_string()),
        email: Set("test@test.com".to_string()),
        password: Set("hashed-password".to_string()),
    }
}

pub trait UserFactory {
    fn email(self, email: String) -> user::ActiveModel;
    fn password(self, password: String) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn email(mut self, email: String) -> user::ActiveModel {
        self.email = Set(email);
        self
    }

    fn password(mut self, password: String) -> user::ActiveModel {
        self.password = Set(password);
        self
    }
}

pub fn tag(user_id: i32) -> tag::ActiveModel {
    tag::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        name: Set("plain_tag".to_string()),
        theme_color: Set("ecf0f1".to_string()),
        parent_id: Set(None),
        pinned: Set(false),
        order: NotSet,
        hidden: NotSet,
    }
}

pub trait TagFactory {
    fn name(self, name: String) -> tag::ActiveModel;
    fn parent_id(self, parent_id: Option<i32>) -> tag::ActiveModel;
}

impl TagFactory for tag::ActiveModel {
    fn name(mut self, name: String) -> tag::ActiveModel {
        self.name = Set(name);
        self
    }

    fn parent_id(mut self, parent_id: Option<i32>) -> tag::ActiveModel {
        self.parent_id = Set(parent_id);
        self
    }
}

pub fn document_tag(user_id: i32) -> document_tag::ActiveModel {
    document_tag::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        name: Set("plain_document_tag".to_string()),
    }
}

pub fn term(user_id: i32) -> term::ActiveModel {
    term::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        name: Set("plain_term".to_string()),
        description: Set(None),
        start: Set(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
        end: Set(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        parent_id: Set(None),
    }
}

pub fn document(user_id: i32) -> document::ActiveModel {
    document::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        title: Set("plain_document".to_string()),
        url: Set("https://example.com".to_string()),
    }
}

pub fn record_scheme(tag_id: i32) -> free_record_scheme::ActiveModel {
    free_record_scheme::ActiveModel {
        id: NotSet,
        tag_id: Set(tag_id),
        name: Set("plain_scheme".to_string()),
        unit_name: Set(None),
        default_graph_type: NotSet,
    }
}
