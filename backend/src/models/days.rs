use serde::*;
use std::fmt;
use std::str::FromStr;

/// Day of the week, using the catalogue's single-character tokens.
///
/// The token alphabet is `U M T W R F S` for Sunday through Saturday, as
/// produced by the upstream schedule-builder data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Error from parsing day tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day token {0:?} (expected one of U M T W R F S)")]
pub struct DayParseError(pub char);

impl DayOfWeek {
    /// All days in week order, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// All days ordered by token character, the catalogue's canonical
    /// rendering order for day strings.
    pub const TOKEN_ORDER: [DayOfWeek; 7] = [
        DayOfWeek::Friday,
        DayOfWeek::Monday,
        DayOfWeek::Thursday,
        DayOfWeek::Saturday,
        DayOfWeek::Tuesday,
        DayOfWeek::Sunday,
        DayOfWeek::Wednesday,
    ];

    /// The single-character catalogue token for this day.
    pub fn token(self) -> char {
        match self {
            DayOfWeek::Sunday => 'U',
            DayOfWeek::Monday => 'M',
            DayOfWeek::Tuesday => 'T',
            DayOfWeek::Wednesday => 'W',
            DayOfWeek::Thursday => 'R',
            DayOfWeek::Friday => 'F',
            DayOfWeek::Saturday => 'S',
        }
    }

    /// Parse a catalogue token (case-insensitive).
    pub fn from_token(c: char) -> Result<Self, DayParseError> {
        match c.to_ascii_uppercase() {
            'U' => Ok(DayOfWeek::Sunday),
            'M' => Ok(DayOfWeek::Monday),
            'T' => Ok(DayOfWeek::Tuesday),
            'W' => Ok(DayOfWeek::Wednesday),
            'R' => Ok(DayOfWeek::Thursday),
            'F' => Ok(DayOfWeek::Friday),
            'S' => Ok(DayOfWeek::Saturday),
            other => Err(DayParseError(other)),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of days of the week, stored as a 7-bit mask.
///
/// The empty set is valid: a section with no meeting days never clashes and
/// satisfies any day constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DaySet(u8);

impl DaySet {
    pub const EMPTY: DaySet = DaySet(0);

    /// Parse a day-token string such as `"MTWRF"`.
    ///
    /// Tokens are case-insensitive and duplicates are tolerated; whitespace
    /// is ignored. Any other character is rejected.
    pub fn parse(tokens: &str) -> Result<Self, DayParseError> {
        let mut set = DaySet::EMPTY;
        for c in tokens.chars() {
            if c.is_whitespace() {
                continue;
            }
            set.insert(DayOfWeek::from_token(c)?);
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: DayOfWeek) {
        self.0 |= day.bit();
    }

    pub fn contains(&self, day: DayOfWeek) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if the two sets share at least one day.
    pub fn intersects(&self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every day in `self` is also in `other`.
    pub fn is_subset_of(&self, other: DaySet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Days in canonical (token-alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = DayOfWeek> + '_ {
        DayOfWeek::TOKEN_ORDER
            .into_iter()
            .filter(|day| self.contains(*day))
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.token())?;
        }
        Ok(())
    }
}

impl FromStr for DaySet {
    type Err = DayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaySet::parse(s)
    }
}

impl FromIterator<DayOfWeek> for DaySet {
    fn from_iter<I: IntoIterator<Item = DayOfWeek>>(iter: I) -> Self {
        let mut set = DaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl TryFrom<String> for DaySet {
    type Error = DayParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DaySet::parse(&s)
    }
}

impl From<DaySet> for String {
    fn from(set: DaySet) -> String {
        set.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_contains() {
        let set = DaySet::parse("MWF").unwrap();
        assert!(set.contains(DayOfWeek::Monday));
        assert!(set.contains(DayOfWeek::Wednesday));
        assert!(set.contains(DayOfWeek::Friday));
        assert!(!set.contains(DayOfWeek::Tuesday));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_parse_case_insensitive_and_duplicates() {
        let set = DaySet::parse("mmTt").unwrap();
        assert_eq!(set, DaySet::parse("MT").unwrap());
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        assert_eq!(DaySet::parse("M?F"), Err(DayParseError('?')));
        assert_eq!(DaySet::parse("MX"), Err(DayParseError('X')));
    }

    #[test]
    fn test_empty_set() {
        let empty = DaySet::parse("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, DaySet::EMPTY);
        assert_eq!(empty.to_string(), "");
        // The empty set is a subset of everything and intersects nothing.
        assert!(empty.is_subset_of(DaySet::parse("MTWRF").unwrap()));
        assert!(empty.is_subset_of(DaySet::EMPTY));
        assert!(!empty.intersects(DaySet::parse("MTWRFSU").unwrap()));
    }

    #[test]
    fn test_subset_and_intersects() {
        let mwf = DaySet::parse("MWF").unwrap();
        let weekdays = DaySet::parse("MTWRF").unwrap();
        let weekend = DaySet::parse("SU").unwrap();

        assert!(mwf.is_subset_of(weekdays));
        assert!(!weekdays.is_subset_of(mwf));
        assert!(mwf.intersects(weekdays));
        assert!(!mwf.intersects(weekend));
    }

    #[test]
    fn test_display_is_token_alphabetical() {
        // Matches the catalogue's canonical form: plain character sort.
        let set = DaySet::parse("UMTWRFS").unwrap();
        assert_eq!(set.to_string(), "FMRSTUW");
        let set = DaySet::parse("TR").unwrap();
        assert_eq!(set.to_string(), "RT");
    }

    #[test]
    fn test_serde_string_form() {
        let set: DaySet = serde_json::from_str("\"MWF\"").unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"FMW\"");
        let bad: Result<DaySet, _> = serde_json::from_str("\"MX\"");
        assert!(bad.is_err());
    }
}
