/// Canned replies for exact phrases, matched case-insensitively.
pub const EASTER_EGGS: &[(&str, &str)] = &[
    (
        "i'm bored",
        "Why not explore the terminal? Try 'show files' or ask for a joke!",
    ),
    (
        "tell me a joke",
        "Why don't scientists trust atoms? Because they might be up to something!",
    ),
    (
        "who are you",
        "I'm TermBot, your friendly terminal assistant, here to make your command-line life easier!",
    ),
    (
        "what is the meaning of life",
        "42, of course! But if you want a real answer, try 'show files' to find meaning in your directories.",
    ),
    (
        "hello world",
        "A classic! Want to see what's in your world? Try 'list files'.",
    ),
    (
        "do a barrel roll",
        "Spinning through the terminal! Want to spin through your files? Say 'show files'.",
    ),
];

pub fn lookup(input: &str) -> Option<&'static str> {
    let lower = input.to_lowercase();
    EASTER_EGGS
        .iter()
        .find(|(trigger, _)| *trigger == lower)
        .map(|(_, response)| *response)
}
