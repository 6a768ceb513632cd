//! Launcher-facing strings and scores

pub const PLUGIN_ID: &str = "A6C12BABD1F4488882031CD16CCAE1BF";
pub const NAME: &str = "Dice Roller";
pub const DESCRIPTION: &str = "Roll Dice using common dice notation (1d6 for example)";
pub const ICON_PATH: &str = "Images\\light-dice_1.png";

/// Title of the notification shown when a roll is triggered
pub const ROLLING: &str = "Rolling...";
pub const PRESS_TO_ROLL: &str = "Press To Roll";
pub const ADD_MORE_ROLLS: &str = " (Add more rolls with Space)";
pub const HELP: &str = "Write a common dice notation to create a roll. (1d6, 2d20, 5d8, etc..)\n\
                        Multi rolls can be added with Space.\n\
                        Add a modifier to the roll with +/-# (1d6+2, 2d20-5, etc...)";

pub const CUSTOM_SCORE: i64 = 1000;
pub const HELP_SCORE: i64 = 1000;

/// Single die sizes always offered, with their scores
pub const QUICK_ROLLS: [(u64, i64); 7] = [
    (4, 60),
    (6, 50),
    (8, 40),
    (10, 30),
    (12, 20),
    (20, 10),
    (100, 0),
];
