//! The two cards of the main content block.

use std::sync::Arc;

use barako::widgets::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use barako::{Handler, HandlerRegistry};
use leafdom::Element;

use super::dropdown::Dropdown;

pub const CARD_ACTION_ID: &str = "card-action";
pub const CARD_ACTION_ALERT: &str = "Button 2 clicked!";

/// Numbered upload steps: bold lead-in, then the explanation.
pub const UPLOAD_STEPS: [(&str, &str); 5] = [
    (
        "1. Prepare Your Photo: ",
        "Ensure that the photo clearly shows a coffee leaf. Avoid blurriness and make sure \
         the leaf is the main focus of the image.",
    ),
    (
        "2. File Format: ",
        "Accepted file formats are JPEG and PNG.",
    ),
    (
        "3. Image Quality: ",
        "For the best results, upload images with a resolution of at least 1024x768 pixels.",
    ),
    (
        "4. Upload Your Photo: ",
        "Click the upload button below. Select the photo of the coffee leaf from your device.",
    ),
    (
        "5. Review and Submit: ",
        "After uploading, review the image preview to ensure clarity and focus. \
         Click \"Submit\" to analyze.",
    ),
];

pub const IMPORTANT_NOTES: [(&str, &str); 2] = [
    (
        "Specific to Coffee Leaves: ",
        "Our model is currently optimized to detect diseases only in coffee leaves. Please do \
         not upload images of other plant types.",
    ),
    (
        "Privacy: ",
        "Your photos are processed securely and will not be stored or shared.",
    ),
];

const HEADLINE: &str = "Detect Species and Diseases in Coffee Leaves";
const INTRO: &str = "Our model is designed to identify diseases specifically in coffee leaves. \
     To get started, please follow the simple steps:";

fn line(class: &str, text: &str) -> Element {
    Element::div().class(class).child(Element::text(text))
}

fn bold_line(lead: &str, text: &str) -> Element {
    Element::div()
        .class("w-96 mb-2")
        .child(Element::span(lead).class("font-bold"))
        .child(Element::text(text))
}

fn card_body(children: impl IntoIterator<Item = Element>) -> Element {
    Element::div().class("relative z-10 p-4").children(children)
}

/// The "Upload Instructions" card.
pub fn instructions_card() -> Element {
    let description = CardDescription::new()
        .child(line("w-96 mb-1", HEADLINE))
        .child(line("w-96 mb-4", INTRO))
        .children(UPLOAD_STEPS.iter().map(|(lead, text)| bold_line(lead, text)))
        .build();

    let notes = CardDescription::new()
        .children(IMPORTANT_NOTES.iter().map(|(lead, text)| bold_line(lead, text)))
        .build();

    let header = CardHeader::new()
        .child(
            CardTitle::new()
                .class("text-center")
                .text("Upload Instructions")
                .build(),
        )
        .child(description)
        .child(
            CardTitle::new()
                .class("text-center mb-4")
                .text("Important Notes")
                .build(),
        )
        .child(notes)
        .build();

    Card::new()
        .id("instructions-card")
        .class("relative overflow-hidden w-auto")
        .child(card_body([header]))
        .build()
}

/// The secondary card with the step dropdown and the alert button.
pub fn showcase_card(dropdown: &Dropdown, registry: &HandlerRegistry) -> Element {
    let on_click: Handler = Arc::new(|hx| hx.cx().alert(CARD_ACTION_ALERT));
    registry.register(CARD_ACTION_ID, "on_click", on_click);

    let header = CardHeader::new()
        .child(CardTitle::new().text("Card 2 Title").build())
        .child(CardDescription::new().text("Card 2 Description").build())
        .build();

    let footer = CardFooter::new()
        .child(
            Element::button()
                .id(CARD_ACTION_ID)
                .clickable(true)
                .child(Element::text("Click Me")),
        )
        .build();

    Card::new()
        .id("showcase-card")
        .class("relative overflow-hidden w-64")
        .child(card_body([
            dropdown.element(registry),
            header,
            CardContent::new().text("Picture 2").build(),
            footer,
        ]))
        .build()
}
