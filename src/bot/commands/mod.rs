pub mod poll;

use std::fmt;
use std::str::FromStr;

use crate::bot::platform::ReplyKeyboard;
use crate::error::PollError;
use crate::poll::VoteChoice;
use crate::utils::format::{capitalize, fill_template};

/// What an inbound text asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartPoll,
    Vote(VoteChoice),
    OptOut,
    CancelPoll,
    Help,
}

impl Action {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartPoll => "start_poll",
            Action::Vote(_) => "vote",
            Action::OptOut => "opt_out",
            Action::CancelPoll => "cancel_poll",
            Action::Help => "help",
        }
    }
}

/// Language of the command phrases and replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Russian => write!(f, "ru"),
        }
    }
}

/// Command phrases, reply texts and the reply keyboard for one language.
///
/// Phrases are stored lowercase; inbound text is trimmed and case-folded before matching.
/// Reply templates use `{name}`, `{choice}`, `{yes}`, `{no}` and `{later}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub start_phrase: &'static str,
    pub yes_phrase: &'static str,
    pub no_phrase: &'static str,
    pub later_phrase: &'static str,
    pub opt_out_phrase: &'static str,
    pub cancel_phrase: &'static str,

    pub yes_label: &'static str,
    pub no_label: &'static str,
    pub later_label: &'static str,

    pub poll_started: &'static str,
    pub already_active: &'static str,
    pub not_started: &'static str,
    pub duplicate_vote: &'static str,
    pub not_organizer: &'static str,
    pub vote_recorded: &'static str,
    pub results: &'static str,
    pub farewell: &'static str,
    pub cancelled: &'static str,
    pub expired: &'static str,
    pub help_prompt: &'static str,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

impl Vocabulary {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Russian => Self::russian(),
        }
    }

    pub fn english() -> Self {
        Self {
            start_phrase: "who wants to play rainbow?",
            yes_phrase: "yes",
            no_phrase: "no",
            later_phrase: "later",
            opt_out_phrase: "not rainbow",
            cancel_phrase: "cancel rainbow",

            yes_label: "yes",
            no_label: "no",
            later_label: "later",

            poll_started: "The game is starting! Are you in? Pick or type 'Yes', 'No' or 'Later'.",
            already_active: "A game is already running. Finish the current game before starting a new one.",
            not_started: "The game hasn't started yet. Type 'who wants to play rainbow?' to start one.",
            duplicate_vote: "You have already voted!",
            not_organizer: "Only the player who started the game can cancel it.",
            vote_recorded: "{name} answered '{choice}'.",
            results: "Results:\nYes: {yes}\nNo: {no}\nLater: {later}",
            farewell: "Oh well, {name}, drop by another time!",
            cancelled: "The game has been cancelled.",
            expired: "Time is up, the game is closed.",
            help_prompt: "Pick a command from the menu.",
        }
    }

    pub fn russian() -> Self {
        Self {
            start_phrase: "кто играть в радугу?",
            yes_phrase: "да",
            no_phrase: "нет",
            later_phrase: "позже",
            opt_out_phrase: "не в радугу",
            cancel_phrase: "отмена радуги",

            yes_label: "буду",
            no_label: "не буду",
            later_label: "позже",

            poll_started: "Игра начинается! Будете играть? Выберите или напишите 'Да', 'Нет' или 'Позже'.",
            already_active: "Игра уже запущена. Завершите текущую игру, чтобы начать новую.",
            not_started: "Игра еще не началась. Напишите 'кто играть в радугу?', чтобы начать.",
            duplicate_vote: "Вы уже проголосовали!",
            not_organizer: "Отменить игру может только тот, кто её начал.",
            vote_recorded: "{name} ответил '{choice}'.",
            results: "Результаты:\nДа: {yes}\nНет: {no}\nПозже: {later}",
            farewell: "Ну ладно, {name}, заходи в другой раз!",
            cancelled: "Игра отменена.",
            expired: "Время вышло, игра закрыта.",
            help_prompt: "Выбери команду из меню.",
        }
    }

    /// Maps inbound text to an action; anything unrecognised asks for help.
    pub fn classify(&self, text: &str) -> Action {
        let normalized = text.trim().to_lowercase();
        let normalized = normalized.as_str();

        if normalized == self.start_phrase {
            Action::StartPoll
        } else if normalized == self.yes_phrase {
            Action::Vote(VoteChoice::Yes)
        } else if normalized == self.no_phrase {
            Action::Vote(VoteChoice::No)
        } else if normalized == self.later_phrase {
            Action::Vote(VoteChoice::Later)
        } else if normalized == self.opt_out_phrase {
            Action::OptOut
        } else if normalized == self.cancel_phrase {
            Action::CancelPoll
        } else {
            Action::Help
        }
    }

    /// How a choice is echoed back in chat.
    pub fn choice_label(&self, choice: VoteChoice) -> &'static str {
        match choice {
            VoteChoice::Yes => self.yes_label,
            VoteChoice::No => self.no_label,
            VoteChoice::Later => self.later_label,
        }
    }

    pub fn error_message(&self, error: PollError) -> &'static str {
        match error {
            PollError::AlreadyActive => self.already_active,
            PollError::NotStarted => self.not_started,
            PollError::DuplicateVote => self.duplicate_vote,
            PollError::NotOrganizer => self.not_organizer,
        }
    }

    pub fn vote_recorded_text(&self, name: &str, choice: VoteChoice) -> String {
        fill_template(
            self.vote_recorded,
            &[("name", name), ("choice", self.choice_label(choice))],
        )
    }

    pub fn results_text(&self, yes: &str, no: &str, later: &str) -> String {
        fill_template(self.results, &[("yes", yes), ("no", no), ("later", later)])
    }

    pub fn farewell_text(&self, name: &str) -> String {
        fill_template(self.farewell, &[("name", name)])
    }

    /// Menu shown with the help prompt: start and opt-out on top, the answers below.
    pub fn keyboard(&self) -> ReplyKeyboard {
        ReplyKeyboard::new(vec![
            vec![capitalize(self.start_phrase), capitalize(self.opt_out_phrase)],
            vec![
                capitalize(self.yes_phrase),
                capitalize(self.no_phrase),
                capitalize(self.later_phrase),
            ],
        ])
    }
}
