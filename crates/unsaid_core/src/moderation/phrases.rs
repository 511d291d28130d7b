//! Built-in blocked phrase set.
//!
//! Targets direct threats, self-harm incitement, slurs and targeted abuse.
//! General profanity and ordinary emotional language are deliberately absent.

/// Default phrases used when no list is configured.
pub const DEFAULT_BLOCKED_PHRASES: &[&str] = &[
    // threats and incitement
    "i will kill you",
    "i will harm you",
    "i will hurt you",
    "i want to kill you",
    "kill yourself",
    "go kill yourself",
    "harm yourself",
    "i want to kill myself",
    "i want to die",
    "i hope you die",
    "you should die",
    "you deserve to die",
    "i hope you kill yourself",
    "you should kill yourself",
    "i hope you harm yourself",
    "you should harm yourself",
    "i hope you hurt yourself",
    "you should hurt yourself",
    "go die",
    "die bitch",
    "die asshole",
    "fucking die",
    // targeted abuse
    "hate you",
    "i hate you so much",
    "worthless piece of shit",
    "you are worthless",
    "you are useless",
    "piece of shit",
    "human garbage",
    "fucked her",
    "motherfucker",
    "motherfucking",
    "bitch",
    "whore",
    "slut",
    "retard",
    "moron",
    "asshole",
    // slurs
    "nigger",
    "faggot",
    "chink",
    "tranny",
    "kike",
    // sexual violence
    "rape",
    "rape you",
    "rape her",
    "rape him",
    "rape them",
    "rape us",
    "i will rape",
    "you should be raped",
];
