pub static VOCABULARY: [&str; 20] = [
    "chicken",
    "beef",
    "pasta",
    "rice",
    "potato",
    "tomato",
    "onion",
    "garlic",
    "cheese",
    "egg",
    "milk",
    "butter",
    "olive oil",
    "flour",
    "sugar",
    "salt",
    "pepper",
    "carrot",
    "broccoli",
    "spinach",
];

pub static POPULAR: [&str; 5] = ["chicken", "tomato", "cheese", "potato", "onion"];

pub fn canonical(candidate: &str) -> Option<&'static str> {
    let normalized = candidate.to_lowercase();
    VOCABULARY
        .iter()
        .copied()
        .find(|entry| entry.to_lowercase() == normalized)
}

pub fn is_known(candidate: &str) -> bool {
    canonical(candidate).is_some()
}
