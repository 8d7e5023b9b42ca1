//! ketav crate example
//!
//! Transliterates a pointed verse, builds an in-memory index with the
//! transliteration tokenizer and searches it with Latin and Hebrew queries.

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{
  Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions, Value,
};
use tantivy::{Index, IndexWriter, TantivyDocument, Term};
use tracing_subscriber::EnvFilter;

use ketav::KetavService;
use ketav::config::KetavConfig;
use ketav::tokenizer::{HEBREW_TOKENIZER_NAME, HebrewTokenizer, register_hebrew_tokenizer};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Genesis 1:1, fully pointed with accents
const GENESIS_1_1: &str = "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05B4}\u{05C1}\u{0596}\u{05D9}\u{05EA} \
\u{05D1}\u{05BC}\u{05B8}\u{05E8}\u{05B8}\u{05A3}\u{05D0} \
\u{05D0}\u{05B1}\u{05DC}\u{05B9}\u{05D4}\u{05B4}\u{0591}\u{05D9}\u{05DD}";

/// Builds a schema with a stored reference and a transliterated text field.
fn build_schema() -> (Schema, Field, Field) {
  let mut builder = Schema::builder();
  let reference = builder.add_text_field("reference", STRING | STORED);

  let text_indexing = TextFieldIndexing::default()
    .set_tokenizer(HEBREW_TOKENIZER_NAME)
    .set_index_option(IndexRecordOption::WithFreqsAndPositions);
  let text_options = TextOptions::default().set_indexing_options(text_indexing).set_stored();
  let text = builder.add_text_field("text", text_options);

  (builder.build(), reference, text)
}

/// Prints every word of the verse with its transliteration and key.
fn print_verse(service: &KetavService, verse: &str) -> AppResult<()> {
  println!("\n===== Transliteration =====");
  for word in service.transliterate_text(verse)? {
    println!(
      "  {} | {} | {} | {}",
      word.hebrew, word.transliteration, word.unpointed, word.index_key
    );
  }
  Ok(())
}

/// Searches the text field with the keys produced for `query`, OR-combined.
fn search(
  service: &KetavService,
  index: &Index,
  reference: Field,
  text: Field,
  query: &str,
) -> AppResult<()> {
  let keys = service.query_keys(query)?;
  let clauses: Vec<(Occur, Box<dyn Query>)> = keys
    .iter()
    .map(|key| {
      let term = Term::from_field_text(text, key);
      let query: Box<dyn Query> = Box::new(TermQuery::new(term, IndexRecordOption::Basic));
      (Occur::Should, query)
    })
    .collect();
  let query_obj = BooleanQuery::new(clauses);

  let searcher = index.reader()?.searcher();
  let top_docs = searcher.search(&query_obj, &TopDocs::with_limit(10))?;

  println!("\nSearch results (Query: \"{query}\", keys: {keys:?}):");
  for (score, doc_address) in top_docs {
    let doc: TantivyDocument = searcher.doc(doc_address)?;
    let reference = doc.get_first(reference).and_then(|v| v.as_str()).unwrap_or_default();
    println!("  [{score:.4}] {reference}");
  }
  Ok(())
}

fn main() -> AppResult<()> {
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for ketav, warn or above for tantivy
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,ketav=debug,tantivy=warn"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Service with default configuration
  let service = KetavService::init(&KetavConfig::default())?;
  print_verse(&service, GENESIS_1_1)?;

  // 2. In-memory index with the transliteration tokenizer
  let (schema, reference, text) = build_schema();
  let index = Index::create_in_ram(schema);
  register_hebrew_tokenizer(&index, HebrewTokenizer::new());

  let mut writer: IndexWriter = index.writer(50_000_000)?;
  let mut doc = TantivyDocument::default();
  doc.add_text(reference, "Gen 1:1");
  doc.add_text(text, GENESIS_1_1);
  writer.add_document(doc)?;
  writer.commit()?;

  // 3. Latin and Hebrew queries meet on the same keys
  search(&service, &index, reference, text, "elohim")?;
  search(&service, &index, reference, text, "bara")?;
  search(&service, &index, reference, text, "\u{05D1}\u{05E8}\u{05D0}")?;

  // 4. Lexicon keys
  println!("\nLookup keys: {:?}", service.lookup_keys("H430, H1254 strong:H7225"));

  Ok(())
}
