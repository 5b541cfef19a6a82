/// Word text as typed by a user or returned by the relation API.
/// Examples: `test`, `rest`, `arrest`
pub type Word = String;
/// Field name used to pick a grouping label out of a dynamic record.
/// Examples: `team`, `numSyllables`
pub type FieldName = String;
/// Identifier for the source that produced a set of related words.
/// Examples: `datamuse`, `fixture`
pub type SourceId = String;
/// Heading text shown above one group of results.
/// Example: `2 syllables`
pub type GroupHeading = String;
