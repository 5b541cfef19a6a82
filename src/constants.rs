/// Constants used by the word-relation wire format.
pub mod wire {
    /// Field holding the syllable count reported for rhyme results.
    ///
    /// The field name callers group undecoded rhyme rows by.
    pub const FIELD_NUM_SYLLABLES: &str = "numSyllables";
}

/// Constants used by the Datamuse-compatible HTTP source.
pub mod datamuse {
    /// Default endpoint serving word-relation queries.
    pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";
    /// Default source id used in errors and logs.
    pub const DEFAULT_SOURCE_ID: &str = "datamuse";
    /// Query parameter selecting perfect rhymes.
    pub const PARAM_RHYME: &str = "rel_rhy";
    /// Query parameter selecting synonyms.
    pub const PARAM_SYNONYM: &str = "rel_syn";
    /// Query parameter capping the number of returned rows.
    pub const PARAM_MAX: &str = "max";
}
