// @generated by roster-gen from people.yaml. Do not edit.

use std::borrow::Cow;

use roster_model::Person;

pub static PEOPLE: &[Person] = &[
    Person {
        name: Cow::Borrowed("Alice Smith"),
        email: Cow::Borrowed("alice@example.com"),
        slack_handle: Cow::Borrowed("@alice"),
        teams: Cow::Borrowed(&[Cow::Borrowed("Platform Team"), Cow::Borrowed("Site Reliability")]),
    },
    Person {
        name: Cow::Borrowed("Bob Jones"),
        email: Cow::Borrowed("bob@example.com"),
        slack_handle: Cow::Borrowed("@bob"),
        teams: Cow::Borrowed(&[Cow::Borrowed("Platform Team")]),
    },
    Person {
        name: Cow::Borrowed("Carol O'Neill"),
        email: Cow::Borrowed("carol@example.com"),
        slack_handle: Cow::Borrowed("@carol"),
        teams: Cow::Borrowed(&[Cow::Borrowed("Site Reliability")]),
    },
    Person {
        name: Cow::Borrowed("Dave Brown"),
        email: Cow::Borrowed("dave@example.com"),
        slack_handle: Cow::Borrowed("@dave"),
        teams: Cow::Borrowed(&[Cow::Borrowed("Site Reliability")]),
    },
    Person {
        name: Cow::Borrowed("Erin \"EJ\" Jackson"),
        email: Cow::Borrowed("erin@example.com"),
        slack_handle: Cow::Borrowed("@erin"),
        teams: Cow::Borrowed(&[Cow::Borrowed("Developer Experience")]),
    },
];
