//! Built-in category catalogue and entry lists used when no bank file exists.

use crate::types::{Category, GameMode, QuestionPair, WordEntry};
use std::collections::BTreeMap;

const WORD_CATEGORIES: &[(&str, &str, &str)] = &[
    ("christmas", "Christmas", "🎄"),
    ("animals", "Animals", "🐾"),
    ("food", "Food", "🍕"),
    ("objects", "Objects", "🪑"),
    ("movies", "Movies", "🎬"),
    ("locations", "Locations", "📍"),
    ("sports", "Sports", "⚽"),
    ("professions", "Professions", "💼"),
    ("brands", "Brands", "🏷️"),
    ("tools", "Tools", "🛠️"),
    ("vehicles", "Vehicles", "🚗"),
    ("superpowers", "Superpowers", "⚡"),
    ("games", "Games", "🎮"),
    ("countries", "Countries", "🗺️"),
];

const QUESTION_CATEGORIES: &[(&str, &str, &str)] = &[
    ("daily_life", "Daily Life", "🏠"),
    ("love_rel", "Love & Romance", "💑"),
    ("money_fame", "Money & Fame", "💰"),
    ("future_tech", "Future & Tech", "🤖"),
    ("spicy_wild", "Spicy & Wild", "🔥"),
];

#[rustfmt::skip]
const WORD_BANK: &[(&str, &[(&str, &str)])] = &[
    ("christmas", &[
        ("Reindeer", "They pull a heavy sleigh"),
        ("Snowman", "Built with three large balls"),
        ("Tinsel", "Shiny string on trees"),
        ("Mistletoe", "Makes people kiss"),
        ("Eggnog", "Thick creamy holiday drink"),
        ("Stocking", "Hung by the chimney"),
        ("Sleigh", "Santa's vehicle"),
        ("Grinch", "Green holiday hater"),
        ("Gingerbread", "Spicy cookies used for houses"),
    ]),
    ("animals", &[
        ("Elephant", "Has a long trunk and big ears"),
        ("Giraffe", "Very long neck"),
        ("Penguin", "Flightless bird in tuxedos"),
        ("Octopus", "Eight arms and ink"),
        ("Kangaroo", "Has a pouch for babies"),
        ("Chameleon", "Changes color to hide"),
        ("Flamingo", "Pink bird that stands on one leg"),
    ]),
    ("food", &[
        ("Sushi", "Raw fish and rice"),
        ("Burrito", "Wrapped in a flour tortilla"),
        ("Spaghetti", "Long thin noodles"),
        ("Croissant", "Flaky buttery French pastry"),
        ("Pizza", "Italian round dough with toppings"),
    ]),
    ("objects", &[
        ("Telescope", "Look at stars through this"),
        ("Typewriter", "Old school word processor"),
        ("Headphones", "Used to listen to music privately"),
        ("Flashlight", "Portable light source"),
    ]),
    ("movies", &[
        ("Inception", "Dreams within dreams"),
        ("Titanic", "Famous sinking ship movie"),
        ("Star Wars", "Space opera with lightsabers"),
    ]),
    ("locations", &[
        ("Paris", "City of Light with the Eiffel Tower"),
        ("Tokyo", "Busiest capital of Japan"),
        ("Egypt", "Home of the Great Pyramids"),
    ]),
    ("sports", &[
        ("Basketball", "Played with a hoop and a ball"),
        ("Cricket", "Popular in UK and India with bats"),
        ("Tennis", "Played on a court with rackets"),
    ]),
    ("professions", &[
        ("Astronaut", "Goes to outer space"),
        ("Surgeon", "Performs medical operations"),
        ("Firefighter", "Puts out blazes"),
    ]),
    ("brands", &[
        ("Apple", "Known for the iPhone"),
        ("Nike", "Famous for the Swoosh logo"),
        ("Google", "The world's biggest search engine"),
    ]),
    ("tools", &[
        ("Screwdriver", "Used for turning screws"),
        ("Hammer", "Used for hitting nails"),
        ("Wrench", "Used for loosening nuts"),
    ]),
    ("vehicles", &[
        ("Submarine", "Goes underwater"),
        ("Helicopter", "Blades on top, vertical takeoff"),
        ("Motorcycle", "Two wheels and an engine"),
    ]),
    ("superpowers", &[
        ("Invisibility", "Cannot be seen"),
        ("Teleportation", "Move instantly from place to place"),
        ("Flying", "Soaring through the air"),
    ]),
    ("games", &[
        ("Minecraft", "Block building game"),
        ("Chess", "Game of kings on a 64-square board"),
        ("Among Us", "Social deduction game in space"),
    ]),
    ("countries", &[
        ("Canada", "Maple leaves and cold winters"),
        ("Japan", "Land of the rising sun"),
        ("Brazil", "Largest country in South America"),
    ]),
];

#[rustfmt::skip]
const QUESTION_BANK: &[(&str, &[(&str, &str)])] = &[
    ("daily_life", &[
        ("What is the first thing you do when you wake up?", "What is something you do every morning?"),
        ("Which kitchen appliance could you not live without?", "What is a common object in your house?"),
        ("How do you prefer to travel locally?", "How do you get from place to place?"),
    ]),
    ("love_rel", &[
        ("What was your most romantic date like?", "What is a nice way to spend time with someone?"),
        ("What quality do you value most in a partner?", "What do you like about people?"),
    ]),
    ("money_fame", &[
        ("What would you buy first if you won the lottery?", "What is something expensive you want?"),
        ("Would you rather be famous for art or science?", "What would you like to be known for?"),
    ]),
    ("future_tech", &[
        ("What planet would you want to colonize first?", "Where in space would you go?"),
        ("Which piece of futuristic tech do you want now?", "What is a cool gadget?"),
    ]),
    ("spicy_wild", &[
        ("What is the craziest thing you've done for a dare?", "What is a bold thing you've done?"),
        ("What is a secret talent no one knows about?", "What is something you are good at?"),
    ]),
];

/// Substituted when a WORD category resolves to nothing
pub fn fallback_word() -> WordEntry {
    WordEntry::new("Apple", "A red fruit")
}

/// Substituted when a QUESTION category resolves to nothing
pub fn fallback_question() -> QuestionPair {
    QuestionPair::new("Fruit?", "Food?")
}

/// Selectable categories for a mode, in display order
pub fn categories(mode: GameMode) -> Vec<Category> {
    let table = match mode {
        GameMode::Word => WORD_CATEGORIES,
        GameMode::Question => QUESTION_CATEGORIES,
    };
    table
        .iter()
        .map(|(id, name, icon)| Category::new(id, name, icon))
        .collect()
}

/// First category of a mode; the lobby selection after a mode switch
pub fn default_category(mode: GameMode) -> Category {
    let (id, name, icon) = match mode {
        GameMode::Word => WORD_CATEGORIES[0],
        GameMode::Question => QUESTION_CATEGORIES[0],
    };
    Category::new(id, name, icon)
}

pub fn find_category(mode: GameMode, id: &str) -> Option<Category> {
    categories(mode).into_iter().find(|c| c.id == id)
}

pub fn word_bank() -> BTreeMap<String, Vec<WordEntry>> {
    WORD_BANK
        .iter()
        .map(|(cat, entries)| {
            let entries = entries
                .iter()
                .map(|(word, hint)| WordEntry::new(word, hint))
                .collect();
            (cat.to_string(), entries)
        })
        .collect()
}

pub fn question_bank() -> BTreeMap<String, Vec<QuestionPair>> {
    QUESTION_BANK
        .iter()
        .map(|(cat, pairs)| {
            let pairs = pairs.iter().map(|(a, b)| QuestionPair::new(a, b)).collect();
            (cat.to_string(), pairs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalogue_category_has_entries() {
        let words = word_bank();
        for category in categories(GameMode::Word) {
            assert!(
                words.get(&category.id).is_some_and(|e| !e.is_empty()),
                "word category {} has no entries",
                category.id
            );
        }

        let questions = question_bank();
        for category in categories(GameMode::Question) {
            assert!(
                questions.get(&category.id).is_some_and(|e| !e.is_empty()),
                "question category {} has no entries",
                category.id
            );
        }
    }

    #[test]
    fn test_default_category_is_first_of_mode() {
        assert_eq!(default_category(GameMode::Word).id, "christmas");
        assert_eq!(default_category(GameMode::Question).id, "daily_life");
    }

    #[test]
    fn test_find_category_is_mode_scoped() {
        assert!(find_category(GameMode::Word, "animals").is_some());
        assert!(find_category(GameMode::Question, "animals").is_none());
    }
}
