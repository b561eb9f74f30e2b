//! Contact form wiring: live per-field validation, whole-form validation on
//! submit, and the delayed mailto navigation.

use folio_core::{
    mailto_uri, validate, validate_form, FieldCheck, FieldInput, FieldKind, MAILTO_DELAY_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CONTACT_FORM_ID, FEEDBACK_CLASS, INVALID_CLASS, VALID_CLASS};
use crate::{dom, toast};

const FIELDS: [(&str, FieldKind, bool); 3] = [
    ("contact-name", FieldKind::Plain, true),
    ("contact-email", FieldKind::Email, true),
    ("contact-message", FieldKind::Plain, true),
];

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Toggle the valid/invalid presentation classes and update the adjacent
/// feedback label.
fn show_check(document: &web::Document, id: &str, check: &FieldCheck) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let classes = el.class_list();
    if check.is_valid {
        let _ = classes.remove_1(INVALID_CLASS);
        let _ = classes.add_1(VALID_CLASS);
    } else {
        let _ = classes.remove_1(VALID_CLASS);
        let _ = classes.add_1(INVALID_CLASS);
    }
    if let Some(feedback) = feedback_label(&el) {
        feedback.set_text_content(Some(check.message));
    }
}

fn feedback_label(el: &web::Element) -> Option<web::Element> {
    let sibling = el.next_element_sibling()?;
    if sibling.class_list().contains(FEEDBACK_CLASS) {
        Some(sibling)
    } else {
        None
    }
}

fn clear_decorations(document: &web::Document) {
    for (id, _, _) in FIELDS {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        let classes = el.class_list();
        let _ = classes.remove_1(VALID_CLASS);
        let _ = classes.remove_1(INVALID_CLASS);
        if let Some(feedback) = feedback_label(&el) {
            feedback.set_text_content(Some(""));
        }
    }
}

fn collect_inputs(document: &web::Document) -> Vec<FieldInput> {
    FIELDS
        .iter()
        .map(|&(id, kind, required)| FieldInput {
            id,
            value: field_value(document, id),
            kind,
            required,
        })
        .collect()
}

pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CONTACT_FORM_ID}"))?;

    for (id, kind, required) in FIELDS {
        wire_field(document, id, kind, required);
    }

    let doc = document.clone();
    let form_for_submit = form.clone();
    let submit = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let inputs = collect_inputs(&doc);
        let verdict = validate_form(&inputs);
        // Every field gets feedback in the same pass, not just the first.
        for (input, check) in inputs.iter().zip(verdict.checks.iter()) {
            show_check(&doc, input.id, check);
        }
        if !verdict.all_valid {
            return;
        }

        // The mailto is built from the same values that just validated.
        let [name, email, message] = inputs.as_slice() else {
            return;
        };
        let uri = mailto_uri(&name.value, &email.value, &message.value);

        toast::show(&doc, "Thanks! Opening your mail client\u{2026}");

        let Some(window) = web::window() else { return };
        let doc_later = doc.clone();
        let form_later = form_for_submit.clone();
        dom::set_timeout(&window, MAILTO_DELAY_MS, move || {
            if let Some(win) = web::window() {
                if let Err(e) = win.location().set_href(&uri) {
                    log::error!("mailto navigation error: {:?}", e);
                }
            }
            if let Some(f) = form_later.dyn_ref::<web::HtmlFormElement>() {
                f.reset();
            }
            clear_decorations(&doc_later);
        });
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", submit.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    submit.forget();

    Ok(())
}

/// Blur always re-validates; input re-validates only while the field is
/// currently marked invalid, so a valid field is not re-checked on every
/// keystroke.
fn wire_field(document: &web::Document, id: &'static str, kind: FieldKind, required: bool) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("missing contact field #{id}");
        return;
    };

    {
        let doc = document.clone();
        let blur = Closure::wrap(Box::new(move |_: web::Event| {
            let check = validate(&field_value(&doc, id), kind, required);
            show_check(&doc, id, &check);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
        blur.forget();
    }

    {
        let doc = document.clone();
        let el_input = el.clone();
        let input = Closure::wrap(Box::new(move |_: web::Event| {
            if !el_input.class_list().contains(INVALID_CLASS) {
                return;
            }
            let check = validate(&field_value(&doc, id), kind, required);
            show_check(&doc, id, &check);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("input", input.as_ref().unchecked_ref());
        input.forget();
    }
}
