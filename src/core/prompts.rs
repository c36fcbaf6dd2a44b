//! Canned prompt pools and selection.
//!
//! Every "generated" insight and reframing question is a uniform random pick
//! from a fixed per-mode pool. Selection goes through [`PromptPicker`] so the
//! session engine stays deterministic under test: production code uses
//! [`RandomPicker`], tests inject [`CyclePicker`].

use crate::core::session::Mode;
use rand::Rng;

/// One insight + question pair drawn for a turn.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Empathetic reflection on what the user wrote.
    pub insight: String,

    /// Follow-up reframing question.
    pub question: String,
}

/// Index source for pool selection.
///
/// `pick_index` must return a value in `0..len`. Draws are independent and
/// with replacement; repeats across turns are expected.
pub trait PromptPicker {
    /// Pick an index into a pool of `len` entries.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform random picker used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl PromptPicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic picker for tests: walks each pool in order, wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclePicker {
    next: usize,
}

impl PromptPicker for CyclePicker {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next += 1;
        index
    }
}

/// Draw an insight and a question for `mode`.
///
/// The two picks are independent draws from separate pools, so any
/// insight/question combination can occur.
pub fn draw(mode: Mode, picker: &mut dyn PromptPicker) -> Prompt {
    let (insights, questions) = pools(mode);
    Prompt {
        insight: insights[picker.pick_index(insights.len())].to_string(),
        question: questions[picker.pick_index(questions.len())].to_string(),
    }
}

/// The insight and question pools for `mode`.
#[must_use]
pub fn pools(mode: Mode) -> (&'static [&'static str], &'static [&'static str]) {
    match mode {
        Mode::Reframing => (REFRAMING_INSIGHTS, REFRAMING_QUESTIONS),
        Mode::Emergency => (EMERGENCY_INSIGHTS, EMERGENCY_QUESTIONS),
    }
}

const REFRAMING_INSIGHTS: &[&str] = &[
    "I hear you reflecting on the parts of yourself that felt lost. It takes courage to even acknowledge what we've given up. The fact that you can name these pieces of yourself means they're still there, waiting to be reclaimed.",
    "Your awareness of how you adapted yourself shows incredible self-reflection. Many people go through relationships without ever recognizing these patterns. This insight is actually the first step toward healthier connections.",
    "It sounds like you're beginning to separate your worth from your ability to please others. That's profound growth. The love you gave wasn't wrong — but it shouldn't have required you to disappear.",
    "When we shape ourselves around someone else, it feels like the break-up isn't just about losing a person — it's about losing yourself. That kind of love feels like survival. But the 'you' that existed before is not gone — just hidden under grief.",
    "There's a difference between the story your mind tells in its hardest moments and what is actually true about you. Writing it down the way you just did is how those two start to come apart.",
    "Noticing the thought is not the same as believing it. You just did the harder of the two — you put it into words instead of letting it run in the background.",
];

const REFRAMING_QUESTIONS: &[&str] = &[
    "If you could give yourself permission to be fully authentic in your next relationship, what would that look like? What boundaries would you set to protect the parts of yourself you value most?",
    "What would it feel like to trust that the right person will love you for exactly who you are, without you having to change or minimize yourself?",
    "How might you honor both your caring nature and your need to remain whole in future relationships?",
    "What parts of yourself did you push away or minimize — and what might it feel like to invite them back now?",
    "If a close friend told you they were carrying this exact thought, what would you want them to hear from you?",
    "What's one small piece of evidence from this week that doesn't fit the story this thought is telling?",
];

const EMERGENCY_INSIGHTS: &[&str] = &[
    "I can feel the intensity of what you're going through right now. It takes courage to reach out when everything feels overwhelming. Your feelings are completely valid, and you're not alone in this moment.",
    "What you're experiencing sounds incredibly difficult. I hear the pain in your words, and I want you to know that feeling this way doesn't make you weak—it makes you human. You're doing the right thing by expressing these feelings.",
    "The storm you're in right now feels endless, but storms do pass. Your emotions are telling you something important, and by sharing them, you're already taking a step toward healing. You're stronger than you know.",
    "I can sense how much you're hurting right now. These overwhelming feelings can feel like they'll never end, but they will shift and change. You've survived difficult moments before, and you have the strength to get through this one too.",
    "What you're going through sounds exhausting and painful. It's okay to feel everything you're feeling right now. Sometimes we need to let the emotions flow before we can find our way to calmer waters.",
    "I hear you, and I see your pain. Right now everything might feel chaotic, but you're not broken—you're processing something really difficult. Give yourself permission to feel without judgment.",
    "The weight you're carrying sounds so heavy right now. It's completely understandable that you're feeling overwhelmed. You don't have to carry this alone, and you don't have to have all the answers right now.",
    "Your feelings are so valid, and I'm grateful you trusted this space with them. When everything feels like it's falling apart, sometimes the bravest thing we can do is just keep breathing and take it one moment at a time.",
];

const EMERGENCY_QUESTIONS: &[&str] = &[
    "In this moment of intensity, what would it feel like to speak to yourself with the same compassion you'd show a dear friend going through this?",
    "If you could step back and observe this situation as if you were watching it happen to someone you care about, what would you tell them?",
    "What's one small thing you could do right now to show yourself kindness, even in the middle of this storm?",
    "When you've felt overwhelmed like this before, what helped you find your way back to steadier ground?",
    "If this feeling could speak, what do you think it's trying to tell you that you need right now?",
    "What would it look like to hold space for these difficult emotions without letting them define your entire reality?",
    "If you knew this intense feeling would pass (and it will), how might you treat yourself differently in this moment?",
    "What's one truth about yourself that remains constant, even when everything else feels chaotic?",
];
