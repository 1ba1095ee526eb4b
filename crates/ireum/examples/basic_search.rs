//! Basic name search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Building a searcher from a catalog snapshot
//! - Exact, substring and phonetic matches
//! - Tuning the phonetic stage
//! - Resolving a batch of queries

use ireum::{MatchResult, NameIndexEntry, NameSearcher, SearchConfigBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ireum::init_logging(tracing::Level::INFO)?;

    let searcher = NameSearcher::new([
        NameIndexEntry::new(1, "Golden Dragon BBQ").with_distance(2.0),
        NameIndexEntry::new(2, "Golden Dragon House").with_distance(0.5),
        NameIndexEntry::new(3, "교촌치킨 강남점").with_distance(1.4),
        NameIndexEntry::new(4, "교촌치킨 신사점").with_distance(3.2),
        NameIndexEntry::new(5, "스타벅스 역삼점").with_distance(0.2),
        NameIndexEntry::new(6, "투썸플레이스"),
    ])?;
    println!("{}", searcher.info().summary());

    println!("\nSearching for 'Golden Dragon BBQ':");
    print_results(&searcher.search("Golden Dragon BBQ"));

    println!("\nSearching for 'golden dragon':");
    print_results(&searcher.search("golden dragon"));

    // Dropped final consonant in 남
    println!("\nSearching for '교촌치킨 강나점':");
    print_results(&searcher.search("교촌치킨 강나점"));

    println!("\nLenient search for '스타벅수':");
    let config = SearchConfigBuilder::lenient().top_k(3).build()?;
    print_results(&searcher.search_with_config("스타벅수", &config));

    println!("\nBatch search:");
    let queries = ["역삼점", "교촌", "투섬", "pizza"];
    for (query, results) in queries.iter().zip(searcher.search_bulk(&queries)) {
        println!("  '{query}' -> {} result(s)", results.len());
    }

    Ok(())
}

fn print_results(results: &[MatchResult<u32>]) {
    if results.is_empty() {
        println!("  No results");
    }
    for (i, result) in results.iter().enumerate() {
        println!("  {}. {result}", i + 1);
    }
}
