use kotoba_srs::*;

use log::info;

fn sample_items() -> Vec<ReviewItem> {
    vec![
        ReviewItem::new("vocab-001", "vocabulary", Flashcard::new("こんにちは", "hello")),
        ReviewItem::new(
            "vocab-002",
            "vocabulary",
            Flashcard::new("ありがとう", "thank you"),
        ),
        ReviewItem::new(
            "vocab-003",
            "vocabulary",
            Flashcard::new("水", "water").with_reading("みず"),
        ),
        ReviewItem::new(
            "kanji-001",
            "kanji",
            Flashcard::new("日", "sun, day").with_reading("にち"),
        ),
        ReviewItem::new(
            "kanji-002",
            "kanji",
            Flashcard::new("月", "moon, month").with_reading("げつ"),
        ),
    ]
}

fn run() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "srs.json".to_string());
    let config = load_config(&config_path)?;
    let table = config.interval_table()?;

    let store = SqliteStore::open(&config.database_path)?;
    if store.count()? == 0 {
        store.add_items(&sample_items())?;
        println!("Sample data created!");
    }

    let items = store.load_all()?;
    let now = store.current_date()?;
    let day = day_index(store.start_date()?, now);
    info!("Loaded {} items, study day {}", items.len(), day);

    let queue = select_for_session(&items, now, config.new_per_day, day);
    println!(
        "Day {}: {} new, {} due for review",
        day,
        queue.new_items.len(),
        queue.due_items.len()
    );

    let mut session = StudySession::new(table);
    session.start(queue.into_queue(StudyMode::NewThenDue))?;
    println!("{}", session.progress_message());

    let summary = summarize(&items, config.mastery_threshold);
    println!(
        "Mastered {} of {} items ({}%)",
        summary.mastered_count, summary.total_items, summary.mastered_percentage
    );
    for category in &summary.per_category {
        println!(
            "  - {}: {} / {} ({}%)",
            category.category,
            category.mastered_count,
            category.total_items,
            category.mastered_percentage
        );
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
