//! Vote operations exposed by the voting service and the default emoji catalog

use emojivoto_core::Emoji;

/// Vote operations the voting service implements, with the shortcode each one counts
pub const VOTE_OPERATIONS: &[(&str, &str)] = &[
    ("VotePoop", ":poop:"),
    ("VoteJoy", ":joy:"),
    ("VoteSunglasses", ":sunglasses:"),
    ("VoteRelieved", ":relieved:"),
    ("VoteStuckOutTongueWinkingEye", ":stuck_out_tongue_winking_eye:"),
    ("VoteMoneyMouthFace", ":money_mouth_face:"),
    ("VoteFlushed", ":flushed:"),
    ("VoteMask", ":mask:"),
    ("VoteNerdFace", ":nerd_face:"),
    ("VoteGhost", ":ghost:"),
    ("VoteHeartEyesCat", ":heart_eyes_cat:"),
    ("VoteHearNoEvil", ":hear_no_evil:"),
    ("VoteSeeNoEvil", ":see_no_evil:"),
    ("VoteSpeakNoEvil", ":speak_no_evil:"),
    ("VoteRabbit", ":rabbit:"),
    ("VoteRainbow", ":rainbow:"),
    ("VoteThumbsup", ":thumbsup:"),
    ("VoteWave", ":wave:"),
    ("VoteClap", ":clap:"),
    ("VoteRaisedHands", ":raised_hands:"),
    ("VotePray", ":pray:"),
    ("VoteDog", ":dog:"),
    ("VotePig", ":pig:"),
    ("VoteHatchingChick", ":hatching_chick:"),
    ("VoteSnail", ":snail:"),
    ("VoteBacon", ":bacon:"),
    ("VotePizza", ":pizza:"),
    ("VoteTaco", ":taco:"),
    ("VoteBurrito", ":burrito:"),
    ("VoteRamen", ":ramen:"),
    ("VoteDoughnut", ":doughnut:"),
    ("VoteChampagne", ":champagne:"),
    ("VoteTropicalDrink", ":tropical_drink:"),
    ("VoteBeer", ":beer:"),
    ("VoteRocket", ":rocket:"),
    ("VoteFire", ":fire:"),
    ("VoteJackOLantern", ":jack_o_lantern:"),
    ("VoteBalloon", ":balloon:"),
    ("VoteTada", ":tada:"),
    ("VoteTrophy", ":trophy:"),
    ("VoteCrystalBall", ":crystal_ball:"),
    ("Vote100", ":100:"),
    ("VoteCheckeredFlag", ":checkered_flag:"),
    ("VoteFloppyDisk", ":floppy_disk:"),
];

/// Default catalog as `(shortcode, unicode)` pairs
///
/// `:crossed_swords:` has no vote operation yet.
pub const DEFAULT_CATALOG: &[(&str, &str)] = &[
    (":poop:", "💩"),
    (":joy:", "😂"),
    (":sunglasses:", "😎"),
    (":relieved:", "😌"),
    (":stuck_out_tongue_winking_eye:", "😜"),
    (":money_mouth_face:", "🤑"),
    (":flushed:", "😳"),
    (":mask:", "😷"),
    (":nerd_face:", "🤓"),
    (":ghost:", "👻"),
    (":heart_eyes_cat:", "😻"),
    (":hear_no_evil:", "🙉"),
    (":see_no_evil:", "🙈"),
    (":speak_no_evil:", "🙊"),
    (":rabbit:", "🐰"),
    (":rainbow:", "🌈"),
    (":thumbsup:", "👍"),
    (":wave:", "👋"),
    (":clap:", "👏"),
    (":raised_hands:", "🙌"),
    (":pray:", "🙏"),
    (":dog:", "🐶"),
    (":pig:", "🐷"),
    (":hatching_chick:", "🐣"),
    (":snail:", "🐌"),
    (":bacon:", "🥓"),
    (":pizza:", "🍕"),
    (":taco:", "🌮"),
    (":burrito:", "🌯"),
    (":ramen:", "🍜"),
    (":doughnut:", "🍩"),
    (":champagne:", "🍾"),
    (":tropical_drink:", "🍹"),
    (":beer:", "🍺"),
    (":rocket:", "🚀"),
    (":fire:", "🔥"),
    (":jack_o_lantern:", "🎃"),
    (":balloon:", "🎈"),
    (":tada:", "🎉"),
    (":trophy:", "🏆"),
    (":crystal_ball:", "🔮"),
    (":100:", "💯"),
    (":checkered_flag:", "🏁"),
    (":floppy_disk:", "💾"),
    (":crossed_swords:", "⚔️"),
];

/// Default catalog as emoji records, in catalog order
pub fn default_catalog() -> Vec<Emoji> {
    DEFAULT_CATALOG
        .iter()
        .map(|(shortcode, unicode)| Emoji::new(*shortcode, *unicode))
        .collect()
}
