//! Fixture roster the client starts from on every launch.

use crate::model::{Attendance, Child, Contact, Relation};

fn contact(
    id: &str,
    name: &str,
    relation: Relation,
    phone: &str,
    email: &str,
    is_primary: bool,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        relation,
        phone: phone.to_string(),
        email: email.to_string(),
        is_primary,
    }
}

fn checked_in(at: &str) -> Attendance {
    Attendance::CheckedIn { at: at.to_string() }
}

fn checked_out(at: &str) -> Attendance {
    Attendance::CheckedOut {
        at: Some(at.to_string()),
    }
}

pub fn roster() -> Vec<Child> {
    vec![
        Child::new("1", "Emma Hansen", 4, "Solstrålen")
            .with_attendance(checked_in("07:45"))
            .with_parents(vec![
                contact(
                    "p1",
                    "Kari Hansen",
                    Relation::Mother,
                    "+47 912 34 567",
                    "kari.hansen@epost.no",
                    true,
                ),
                contact(
                    "p2",
                    "Per Hansen",
                    Relation::Father,
                    "+47 923 45 678",
                    "per.hansen@epost.no",
                    false,
                ),
            ]),
        Child::new("2", "Noah Johansen", 5, "Solstrålen")
            .with_attendance(checked_in("08:10"))
            .with_parents(vec![contact(
                "p3",
                "Ingrid Johansen",
                Relation::Mother,
                "+47 934 56 789",
                "ingrid.johansen@epost.no",
                true,
            )]),
        Child::new("3", "Olivia Berg", 3, "Blåklokka")
            .with_attendance(checked_out("15:30"))
            .with_parents(vec![
                contact(
                    "p4",
                    "Lars Berg",
                    Relation::Father,
                    "+47 945 67 890",
                    "lars.berg@epost.no",
                    true,
                ),
                contact(
                    "p5",
                    "Mette Berg",
                    Relation::Mother,
                    "+47 956 78 901",
                    "mette.berg@epost.no",
                    false,
                ),
            ]),
        Child::new("4", "William Larsen", 4, "Blåklokka")
            .with_attendance(checked_in("08:25"))
            .with_parents(vec![contact(
                "p6",
                "Silje Larsen",
                Relation::Mother,
                "+47 967 89 012",
                "silje.larsen@epost.no",
                true,
            )]),
        Child::new("5", "Sofie Andersen", 5, "Solstrålen")
            .with_attendance(checked_out("14:45"))
            .with_parents(vec![contact(
                "p7",
                "Anne Andersen",
                Relation::Guardian,
                "+47 978 90 123",
                "anne.andersen@epost.no",
                true,
            )]),
        Child::new("6", "Lucas Pedersen", 3, "Blåklokka")
            .with_attendance(checked_in("09:00"))
            .with_parents(vec![
                contact(
                    "p8",
                    "Thomas Pedersen",
                    Relation::Father,
                    "+47 989 01 234",
                    "thomas.pedersen@epost.no",
                    true,
                ),
                contact(
                    "p9",
                    "Linn Pedersen",
                    Relation::Mother,
                    "+47 990 12 345",
                    "linn.pedersen@epost.no",
                    false,
                ),
            ]),
        Child::new("7", "Ella Nilsen", 4, "Solstrålen")
            .with_attendance(checked_out("16:00"))
            .with_parents(vec![contact(
                "p10",
                "Hanne Nilsen",
                Relation::Mother,
                "+47 901 23 456",
                "hanne.nilsen@epost.no",
                true,
            )]),
        Child::new("8", "Jakob Kristiansen", 5, "Blåklokka")
            .with_attendance(checked_in("07:30"))
            .with_parents(vec![contact(
                "p11",
                "Erik Kristiansen",
                Relation::Father,
                "+47 912 34 890",
                "erik.kristiansen@epost.no",
                true,
            )]),
    ]
}
