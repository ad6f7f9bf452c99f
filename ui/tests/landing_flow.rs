//! Visitor journey without a renderer: switch to Arabic, fill the form,
//! submit through the simulated sender, and check what the page would show.

use std::cell::RefCell;
use std::rc::Rc;

use api::{InquirySender, SendError};
use futures::future::LocalBoxFuture;
use ui::contact::{dispatch, ContactField, ContactForm, Notice, SimulatedSender, SubmissionStatus};
use ui::content::{self, Section, SectionKey};
use ui::core::{DocumentDirection, DocumentHost, Language, LanguageController, TextDirection};

#[derive(Clone, Default)]
struct FakeDocument {
    dir: Rc<RefCell<Option<TextDirection>>>,
    lang: Rc<RefCell<String>>,
}

impl DocumentHost for FakeDocument {
    fn set_direction(&mut self, direction: TextDirection) {
        *self.dir.borrow_mut() = Some(direction);
    }

    fn set_lang(&mut self, code: &str) {
        *self.lang.borrow_mut() = code.to_string();
    }
}

struct FailingSender;

impl InquirySender for FailingSender {
    fn send(&self, _: api::ContactInquiry) -> LocalBoxFuture<'static, Result<(), SendError>> {
        Box::pin(async { Err(SendError::Transport("relay unreachable".into())) })
    }
}

fn fill(form: &mut ContactForm) {
    for (field, value) in [
        (ContactField::Name, "A"),
        (ContactField::Email, "a@x.com"),
        (ContactField::Phone, "1"),
        (ContactField::Company, ""),
        (ContactField::Service, "VIP Services"),
        (ContactField::Message, "hi"),
    ] {
        form.edit(field, value);
    }
}

#[tokio::test(start_paused = true)]
async fn arabic_visitor_sends_an_inquiry() {
    let document = FakeDocument::default();
    let mut controller =
        LanguageController::default().with_observer(DocumentDirection::new(document.clone()));
    assert_eq!(*document.dir.borrow(), Some(TextDirection::Ltr));

    controller.set_language(Language::Ar);
    assert_eq!(*document.dir.borrow(), Some(TextDirection::Rtl));
    assert_eq!(document.lang.borrow().as_str(), "ar");

    let Section::Contact(contact) = content::resolve(controller.current(), SectionKey::Contact).unwrap()
    else {
        panic!("contact key resolved to another section");
    };
    assert_eq!(contact.submit, "إرسال الرسالة");

    let mut form = ContactForm::new();
    fill(&mut form);
    let submission = form.begin_submit(controller.current()).unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert!(!form.can_submit());
    assert!(submission.inquiry.company.is_empty());

    let outcome = SimulatedSender::new(2_000).send(submission.inquiry).await;
    form.resolve(outcome);

    for field in ContactField::ALL {
        assert_eq!(form.value(field), "", "{field} not cleared");
    }
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.notice(), Some(Notice::Sent));
}

#[tokio::test]
async fn failed_send_keeps_the_visitors_input() {
    let mut form = ContactForm::new();
    fill(&mut form);
    let submission = form.begin_submit(Language::En).unwrap();

    form.resolve(FailingSender.send(submission.inquiry).await);

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.notice(), Some(Notice::Failed));
    assert_eq!(form.value(ContactField::Service), "VIP Services");

    // Retry goes through once the relay is back.
    let retry = form.begin_submit(Language::En).unwrap();
    form.resolve(SimulatedSender::new(0).send(retry.inquiry).await);
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[test]
fn switching_back_restores_ltr_content() {
    let document = FakeDocument::default();
    let mut controller =
        LanguageController::new(Language::Ar).with_observer(DocumentDirection::new(document.clone()));
    controller.set_language(Language::En);
    controller.set_language(Language::En);

    assert_eq!(*document.dir.borrow(), Some(TextDirection::Ltr));
    let Section::Navigation(nav) = content::resolve(Language::En, SectionKey::Navigation).unwrap()
    else {
        panic!("navigation key resolved to another section");
    };
    assert_eq!(nav.home, "Home");
}

#[derive(Default)]
struct CountingSender {
    calls: std::cell::Cell<usize>,
}

impl InquirySender for CountingSender {
    fn send(&self, _: api::ContactInquiry) -> LocalBoxFuture<'static, Result<(), SendError>> {
        self.calls.set(self.calls.get() + 1);
        Box::pin(async { Ok(()) })
    }
}

#[test]
fn incomplete_form_never_reaches_the_sender() {
    let sender = CountingSender::default();
    let mut form = ContactForm::new();
    fill(&mut form);
    form.edit(ContactField::Email, "");

    assert!(dispatch(&mut form, Language::En, &sender).is_err());
    assert_eq!(sender.calls.get(), 0);
    assert_eq!(form.status(), SubmissionStatus::Idle);

    form.edit(ContactField::Email, "a@x.com");
    let pending = dispatch(&mut form, Language::En, &sender).unwrap();
    assert_eq!(sender.calls.get(), 1);
    // A second click while the first is pending is refused.
    assert!(dispatch(&mut form, Language::En, &sender).is_err());
    assert_eq!(sender.calls.get(), 1);

    form.resolve(futures::executor::block_on(pending.outcome));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}
