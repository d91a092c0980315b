//! Target entity schemas and the alias tables that map legacy source column
//! names onto them. Kept as plain const data so the whole mapping is
//! reviewable in one place.

/// Key column carried through unchanged into every output table.
pub const CLIENT_ID: &str = "client_id";

/// Source columns combined into the synthesized contact date.
pub const DAY: &str = "day";
pub const MONTH: &str = "month";

/// Year used when composing `last_contact_date`.
pub const CONTACT_YEAR: i32 = 2022;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Copy the source cell unchanged.
    Passthrough,
    /// Delete every `.`, then rewrite `-` to `_`.
    NormalizeJob,
    /// Rewrite `.` to `_`; a resulting `unknown` becomes null.
    NormalizeEducation,
    /// `yes` becomes 1; anything else, nulls included, becomes 0.
    YesToBinary,
    /// `success` becomes 1; anything else becomes 0.
    SuccessToBinary,
    /// Compose `YYYY-MM-DD` from the day and month columns when both exist,
    /// otherwise pass an already-clean column through.
    ContactDate,
}

/// One output column: its name, the source columns accepted for it (highest
/// priority first), and the value rewrite applied per cell.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub target: &'static str,
    pub aliases: &'static [&'static str],
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Output file stem (`<name>.csv`).
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const CLIENT: EntitySchema = EntitySchema {
    name: "client",
    fields: &[
        FieldSpec {
            target: "age",
            aliases: &["age"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "job",
            aliases: &["job"],
            transform: Transform::NormalizeJob,
        },
        FieldSpec {
            target: "marital",
            aliases: &["marital"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "education",
            aliases: &["education"],
            transform: Transform::NormalizeEducation,
        },
        FieldSpec {
            target: "credit_default",
            aliases: &["default", "credit_default"],
            transform: Transform::YesToBinary,
        },
        FieldSpec {
            target: "mortgage",
            aliases: &["housing", "mortgage"],
            transform: Transform::YesToBinary,
        },
    ],
};

pub const CAMPAIGN: EntitySchema = EntitySchema {
    name: "campaign",
    fields: &[
        FieldSpec {
            target: "number_contacts",
            aliases: &["campaign", "number_contacts"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "contact_duration",
            aliases: &["duration", "contact_duration"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "previous_campaign_contacts",
            aliases: &["previous", "previous_campaign_contacts"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "previous_outcome",
            aliases: &["poutcome", "previous_outcome"],
            transform: Transform::SuccessToBinary,
        },
        FieldSpec {
            target: "campaign_outcome",
            aliases: &["y", "campaign_outcome"],
            transform: Transform::YesToBinary,
        },
        FieldSpec {
            target: "last_contact_date",
            aliases: &["last_contact_date"],
            transform: Transform::ContactDate,
        },
    ],
};

pub const ECONOMICS: EntitySchema = EntitySchema {
    name: "economics",
    fields: &[
        FieldSpec {
            target: "cons_price_idx",
            aliases: &["cons.price.idx", "cons_price_idx"],
            transform: Transform::Passthrough,
        },
        FieldSpec {
            target: "euribor_three_months",
            aliases: &["euribor3m", "euribor_three_months"],
            transform: Transform::Passthrough,
        },
    ],
};

/// The three outputs, in the order they are written.
pub const OUTPUT_SCHEMAS: [EntitySchema; 3] = [CLIENT, CAMPAIGN, ECONOMICS];
