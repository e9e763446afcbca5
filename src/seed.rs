// src/seed.rs

use sqlx::PgPool;

struct SeedQuestion {
    text: &'static str,
    options: [&'static str; 4],
    correct_index: i64,
    explanation: &'static str,
    difficulty: &'static str,
    theme: &'static str,
}

const STARTER_DECK: [SeedQuestion; 10] = [
    SeedQuestion {
        text: "Who is the storyteller in Arabian Nights?",
        options: ["Scheherazade", "Aladdin", "Ali Baba", "Sinbad"],
        correct_index: 0,
        explanation: "Scheherazade tells stories for 1001 nights to the king.",
        difficulty: "easy",
        theme: "Arabian Nights",
    },
    SeedQuestion {
        text: "What magical object does Aladdin find?",
        options: ["Magic Carpet", "Magic Lamp", "Magic Sword", "Golden Ring"],
        correct_index: 1,
        explanation: "Aladdin finds a magical lamp containing a genie.",
        difficulty: "easy",
        theme: "Aladdin",
    },
    SeedQuestion {
        text: "Which phrase opens the thieves' cave?",
        options: ["Open Sesame", "Open the Gate", "Open Magic", "Sesame Gate"],
        correct_index: 0,
        explanation: "'Open Sesame' opens the cave in Ali Baba and the Forty Thieves.",
        difficulty: "easy",
        theme: "Ali Baba",
    },
    SeedQuestion {
        text: "Who travels the seven voyages in Arabian Nights?",
        options: ["Sinbad", "Jafar", "Sultan Omar", "Badr Basim"],
        correct_index: 0,
        explanation: "Sinbad the Sailor explores the seas in seven legendary voyages.",
        difficulty: "medium",
        theme: "Sinbad",
    },
    SeedQuestion {
        text: "Who is the villain in the Aladdin story?",
        options: ["Jafar", "Ali Baba", "Zubaidah", "Maruf"],
        correct_index: 0,
        explanation: "Jafar is the evil sorcerer who tries to steal the lamp.",
        difficulty: "easy",
        theme: "Aladdin",
    },
    SeedQuestion {
        text: "What animal helps Ali Baba?",
        options: ["A slave girl", "A talking parrot", "A genie", "A horse"],
        correct_index: 0,
        explanation: "The slave girl Morgiana saves Ali Baba from the thieves.",
        difficulty: "medium",
        theme: "Ali Baba",
    },
    SeedQuestion {
        text: "What does the genie offer Aladdin?",
        options: ["Three wishes", "A kingdom", "A treasure map", "A flying horse"],
        correct_index: 0,
        explanation: "The genie of the lamp grants Aladdin three wishes.",
        difficulty: "easy",
        theme: "Aladdin",
    },
    SeedQuestion {
        text: "What do the 40 thieves store inside their cave?",
        options: ["Gold and jewels", "Weapons", "Magic scrolls", "Food supplies"],
        correct_index: 0,
        explanation: "The cave is filled with treasure looted by the thieves.",
        difficulty: "easy",
        theme: "Ali Baba",
    },
    SeedQuestion {
        text: "Which creature appears in Sinbad's voyages?",
        options: ["Giant Roc bird", "Dragon", "Mermaid", "Phoenix"],
        correct_index: 0,
        explanation: "The Roc is a giant mythical bird in Sinbad's voyages.",
        difficulty: "medium",
        theme: "Sinbad",
    },
    SeedQuestion {
        text: "Why does Scheherazade tell stories every night?",
        options: [
            "To entertain the king",
            "To save her life",
            "To win a reward",
            "To teach morals",
        ],
        correct_index: 1,
        explanation: "She tells stories so the king will spare her each morning.",
        difficulty: "medium",
        theme: "Arabian Nights",
    },
];

/// Inserts the starter deck when the questions table is empty.
pub async fn seed_questions(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    tracing::info!("Seeding {} starter questions...", STARTER_DECK.len());

    for q in &STARTER_DECK {
        sqlx::query(
            r#"
            INSERT INTO questions (text, options, correct_index, explanation, difficulty, theme)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(q.text)
        .bind(sqlx::types::Json(q.options.to_vec()))
        .bind(q.correct_index)
        .bind(q.explanation)
        .bind(q.difficulty)
        .bind(q.theme)
        .execute(pool)
        .await?;
    }

    tracing::info!("Starter questions seeded.");
    Ok(())
}
