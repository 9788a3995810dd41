//! Header resolution: accepted spellings per field, resolved once per file.

use std::fmt;

/// Semantic field of a transaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Amount,
    Description,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Date, Field::Amount, Field::Description, Field::Category];

    /// Accepted header spellings, highest priority first
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            Field::Date => &["date", "Date", "DATE", "transaction_date", "Transaction Date"],
            Field::Amount => &["amount", "Amount", "AMOUNT", "value", "Value", "price", "Price"],
            Field::Description => &["description", "Description", "DESC", "desc", "details", "Details"],
            Field::Category => &["category", "Category", "CATEGORY", "type", "Type"],
        }
    }

    /// Rows cannot become transactions without this field
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Date | Field::Amount)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Amount => "amount",
            Field::Description => "description",
            Field::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column index of each field within a header record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub amount: Option<usize>,
    pub description: Option<usize>,
    pub category: Option<usize>,
}

impl ColumnMap {
    /// Pick, for every field, the first accepted spelling present in `headers`.
    ///
    /// Header names are compared exactly; only a UTF-8 byte-order mark is stripped.
    pub fn resolve<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}'))
            .collect();

        let find = |field: Field| {
            field
                .candidates()
                .iter()
                .find_map(|name| headers.iter().position(|h| h == name))
        };

        Self {
            date: find(Field::Date),
            amount: find(Field::Amount),
            description: find(Field::Description),
            category: find(Field::Category),
        }
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Date => self.date,
            Field::Amount => self.amount,
            Field::Description => self.description,
            Field::Category => self.category,
        }
    }

    /// Required fields with no matching header
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.index(*f).is_none())
            .collect()
    }
}
