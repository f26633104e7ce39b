// SPDX-License-Identifier: MPL-2.0
//! Contact form and contact details.
//!
//! The form is validated locally. Sending is out of scope: a valid submit
//! marks the form as validated and the view points at the owner's address.

use super::{faded, frame, heading, revealed, SectionId, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, container::CardLook};
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{Element, Length};

/// Heading, form, details.
pub const ITEMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    #[must_use]
    pub fn i18n_key(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "contact-error-name-required",
            (Field::Email, FieldError::Required) => "contact-error-email-required",
            (Field::Email, FieldError::InvalidEmail) => "contact-error-email-invalid",
            (Field::Message, _) => "contact-error-message-required",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edited(Field, String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Validated,
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
    name_error: Option<FieldError>,
    email_error: Option<FieldError>,
    message_error: Option<FieldError>,
    validated: bool,
}

impl State {
    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name_error,
            Field::Email => self.email_error,
            Field::Message => self.message_error,
        }
    }

    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn handle(&mut self, message: Message) -> Event {
        match message {
            Message::Edited(field, value) => {
                match field {
                    Field::Name => {
                        self.name = value;
                        self.name_error = None;
                    }
                    Field::Email => {
                        self.email = value;
                        self.email_error = None;
                    }
                    Field::Message => {
                        self.message = value;
                        self.message_error = None;
                    }
                }
                self.validated = false;
                Event::None
            }
            Message::Submit => {
                self.name_error = self.name.trim().is_empty().then_some(FieldError::Required);
                self.email_error = if self.email.trim().is_empty() {
                    Some(FieldError::Required)
                } else if !is_valid_email(&self.email) {
                    Some(FieldError::InvalidEmail)
                } else {
                    None
                };
                self.message_error = self
                    .message
                    .trim()
                    .is_empty()
                    .then_some(FieldError::Required);

                self.validated = self.name_error.is_none()
                    && self.email_error.is_none()
                    && self.message_error.is_none();
                if self.validated {
                    Event::Validated
                } else {
                    Event::Rejected
                }
            }
        }
    }
}

/// Accepts `local@domain.tld` shapes: no whitespace anywhere, a non-empty
/// part before `@`, and a dot after it with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    email.char_indices().any(|(at, c)| {
        if c != '@' || at == 0 {
            return false;
        }
        let domain = &email[at + 1..];
        domain
            .char_indices()
            .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
    })
}

pub fn view<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, super::Message> {
    let form_visual = ctx.reveal(SectionId::Contact, 1);
    let info_visual = ctx.reveal(SectionId::Contact, 2);

    let form = Column::new()
        .spacing(spacing::LG)
        .push(field_view(
            ctx,
            Field::Name,
            "contact-name-label",
            "contact-name-placeholder",
            &state.name,
            state.name_error,
        ))
        .push(field_view(
            ctx,
            Field::Email,
            "contact-email-label",
            "contact-email-placeholder",
            &state.email,
            state.email_error,
        ))
        .push(field_view(
            ctx,
            Field::Message,
            "contact-message-label",
            "contact-message-placeholder",
            &state.message,
            state.message_error,
        ))
        .push(
            button(text(ctx.i18n.tr("contact-submit")))
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary(ctx.colors))
                .on_press(super::Message::Contact(Message::Submit)),
        );

    let form = if state.validated {
        form.push(
            Column::new()
                .spacing(spacing::XS)
                .push(
                    text(ctx.i18n.tr("contact-validated-title"))
                        .size(typography::TITLE_MD)
                        .color(ctx.colors.brand),
                )
                .push(
                    text(ctx.i18n.tr_with_args(
                        "contact-validated-hint",
                        &[("email", ctx.portfolio.contact.email.as_str())],
                    ))
                    .size(typography::BODY),
                ),
        )
    } else {
        form
    };

    let form_card = Container::new(form)
        .width(Length::FillPortion(3))
        .padding(spacing::XL)
        .style(styles::container::card(
            ctx.colors,
            CardLook {
                opacity: form_visual.opacity,
                ..CardLook::RESTING
            },
        ));

    let contact = &ctx.portfolio.contact;
    let mut details = Column::new().spacing(spacing::LG).width(Length::FillPortion(2));
    let rows = [
        ("contact-info-email", Some(contact.email.as_str())),
        ("contact-info-phone", contact.phone.as_deref()),
        ("contact-info-location", contact.location.as_deref()),
        ("GitHub", contact.github.as_deref()),
        ("LinkedIn", contact.linkedin.as_deref()),
    ];
    for (label, value) in rows {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        let label = if label.starts_with("contact-") {
            ctx.i18n.tr(label)
        } else {
            label.to_string()
        };
        details = details.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text(label).size(typography::TITLE_SM))
                .push(
                    text(value.to_string())
                        .size(typography::BODY)
                        .color(faded(ctx.colors.text_secondary, info_visual.opacity)),
                ),
        );
    }

    let body = Column::new()
        .spacing(spacing::XL)
        .push(heading(ctx, SectionId::Contact, "section-contact-sub", "section-contact-title"))
        .push(
            Row::new()
                .spacing(spacing::XXL)
                .push(revealed(form_card, form_visual))
                .push(revealed(details, info_visual)),
        );

    frame(SectionId::Contact, body)
}

fn field_view<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    label_key: &str,
    placeholder_key: &str,
    value: &'a str,
    error: Option<FieldError>,
) -> Element<'a, super::Message> {
    let input = text_input(&ctx.i18n.tr(placeholder_key), value)
        .on_input(move |value| super::Message::Contact(Message::Edited(field, value)))
        .on_submit(super::Message::Contact(Message::Submit))
        .padding([spacing::SM, spacing::LG])
        .size(typography::BODY)
        .style(styles::text_input::field(ctx.colors, error.is_some()));

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr(label_key)).size(typography::BODY))
        .push(Container::new(input).height(Length::Fixed(sizing::INPUT_HEIGHT)));

    if let Some(error) = error {
        column = column.push(
            text(ctx.i18n.tr(error.i18n_key(field)))
                .size(typography::CAPTION)
                .color(ctx.colors.error),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::default();
        state.handle(Message::Edited(Field::Name, "Ada".into()));
        state.handle(Message::Edited(Field::Email, "ada@example.com".into()));
        state.handle(Message::Edited(Field::Message, "Hello".into()));
        state
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@bc"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email(" a@b.c"));
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Submit), Event::Rejected);
        assert_eq!(state.error(Field::Name), Some(FieldError::Required));
        assert_eq!(state.error(Field::Email), Some(FieldError::Required));
        assert_eq!(state.error(Field::Message), Some(FieldError::Required));
        assert!(!state.is_validated());
    }

    #[test]
    fn whitespace_only_fields_are_required() {
        let mut state = filled();
        state.handle(Message::Edited(Field::Name, "   ".into()));
        state.handle(Message::Submit);
        assert_eq!(state.error(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn malformed_email_is_invalid() {
        let mut state = filled();
        state.handle(Message::Edited(Field::Email, "ada@example".into()));
        state.handle(Message::Submit);
        assert_eq!(state.error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(
            FieldError::InvalidEmail.i18n_key(Field::Email),
            "contact-error-email-invalid"
        );
    }

    #[test]
    fn editing_clears_only_that_field_error() {
        let mut state = State::default();
        state.handle(Message::Submit);
        state.handle(Message::Edited(Field::Email, "x".into()));
        assert_eq!(state.error(Field::Email), None);
        assert_eq!(state.error(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn valid_submit_marks_validated_until_next_edit() {
        let mut state = filled();
        assert_eq!(state.handle(Message::Submit), Event::Validated);
        assert!(state.is_validated());

        state.handle(Message::Edited(Field::Message, "Hello again".into()));
        assert!(!state.is_validated());
    }
}
