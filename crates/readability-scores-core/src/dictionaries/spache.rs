//! Spache familiar-word list.
//!
//! The revised Spache vocabulary of words a reader in the early grades is
//! expected to know. Entries are lowercase; contractions keep their apostrophe.

/// Familiar words for the Spache formula, sorted.
pub static SPACHE_WORDS: &[&str] = &[
    "a", "able", "about", "above", "across", "act", "add", "afraid", "after", "afternoon", "again",
    "against", "ago", "ahead", "air", "airplane", "all", "alone", "along", "already", "also",
    "always", "am", "an", "and", "angry", "animal", "another", "answer", "ant", "any", "anyone",
    "anything", "anyway", "anywhere", "apartment", "apple", "are", "arm", "around", "arrow", "as",
    "ask", "asleep", "at", "ate", "aunt", "away", "baby", "back", "bad", "bag", "bake", "ball",
    "balloon", "band", "bank", "bark", "barn", "baseball", "basket", "bat", "bath", "be", "bean",
    "bear", "beat", "beautiful", "became", "because", "become", "bed", "bee", "been", "before",
    "began", "begin", "behind", "being", "believe", "bell", "belong", "below", "belt", "bench",
    "beside", "best", "better", "between", "big", "bike", "bill", "bird", "birthday", "bit", "bite",
    "black", "blanket", "blew", "block", "blow", "blue", "board", "boat", "body", "bone", "book",
    "boot", "both", "bottle", "bottom", "bounce", "bowl", "box", "boy", "branch", "brave", "bread",
    "break", "breakfast", "bridge", "bright", "bring", "broke", "broken", "brother", "brought",
    "brown", "brush", "bug", "build", "built", "bump", "bunny", "burn", "bus", "bush", "busy",
    "but", "butter", "button", "buy", "by", "cage", "cake", "call", "came", "camp", "can", "can't",
    "candle", "candy", "cap", "captain", "car", "card", "care", "careful", "carry", "case",
    "castle", "cat", "catch", "cattle", "caught", "cave", "cent", "center", "chain", "chair",
    "chance", "change", "chase", "cheese", "chicken", "chief", "child", "children", "chin",
    "chocolate", "circle", "circus", "city", "class", "clean", "clear", "climb", "clock", "close",
    "cloth", "clothes", "cloud", "clown", "coat", "cold", "color", "come", "coming", "company",
    "cook", "cookie", "cool", "corn", "corner", "cost", "could", "couldn't", "count", "country",
    "course", "cover", "cow", "cowboy", "crawl", "cream", "cross", "crowd", "crown", "cry", "cup",
    "cut", "dad", "daddy", "dance", "danger", "dark", "day", "dead", "dear", "decide", "deep",
    "deer", "desk", "did", "didn't", "die", "different", "dig", "dinner", "dirt", "dirty", "dish",
    "do", "doctor", "does", "dog", "doing", "doll", "dollar", "don't", "done", "door", "dot",
    "down", "dragon", "draw", "dream", "dress", "drink", "drive", "drop", "drove", "drum", "dry",
    "duck", "during", "dust", "each", "eager", "ear", "early", "earth", "easy", "eat", "edge",
    "egg", "eight", "either", "elephant", "else", "empty", "end", "enemy", "enough", "even", "ever",
    "every", "everyone", "everything", "eye", "face", "fair", "fall", "family", "far", "farm",
    "farmer", "fast", "fat", "father", "fear", "feed", "feel", "feet", "fell", "felt", "fence",
    "few", "field", "fight", "fill", "find", "fine", "finger", "finish", "fire", "first", "fish",
    "five", "fix", "flag", "flat", "floor", "flower", "fly", "follow", "food", "fool", "foot",
    "for", "forest", "forget", "forgot", "found", "four", "fox", "free", "friend", "frog", "from",
    "front", "fruit", "full", "fun", "funny", "fur", "game", "garden", "gate", "gave", "get",
    "giant", "gift", "girl", "give", "glad", "glass", "go", "goat", "goes", "going", "gold", "gone",
    "good", "good-by", "got", "grandfather", "grandmother", "grass", "gray", "great", "green",
    "grew", "ground", "group", "grow", "guess", "gun", "had", "hair", "half", "hall", "hand",
    "happen", "happy", "hard", "has", "hat", "have", "he", "he's", "head", "hear", "heard", "heart",
    "heavy", "held", "hello", "help", "hen", "her", "here", "herself", "hid", "hide", "high",
    "hill", "him", "himself", "his", "hit", "hold", "hole", "holiday", "home", "hop", "hope",
    "horn", "horse", "hot", "house", "how", "hundred", "hung", "hungry", "hunt", "hurry", "hurt",
    "i", "i'd", "i'll", "i'm", "i've", "ice", "idea", "if", "in", "inch", "inside", "into", "is",
    "it", "it's", "its", "jacket", "jar", "job", "join", "joke", "jump", "just", "keep", "kept",
    "key", "kick", "kill", "kind", "king", "kiss", "kitchen", "kite", "kitten", "knew", "knife",
    "knock", "know", "lady", "laid", "lake", "lamp", "land", "large", "last", "late", "laugh",
    "lay", "lazy", "lead", "leaf", "learn", "least", "leave", "left", "leg", "lesson", "let",
    "let's", "letter", "lie", "life", "lift", "light", "like", "line", "lion", "lip", "listen",
    "little", "live", "load", "long", "look", "lose", "lost", "lot", "loud", "love", "low", "lucky",
    "lunch", "mad", "made", "mail", "make", "man", "many", "map", "mark", "market", "matter", "may",
    "maybe", "me", "meal", "mean", "meat", "meet", "men", "met", "mice", "middle", "might", "mile",
    "milk", "mind", "mine", "minute", "miss", "mix", "money", "monkey", "moon", "more", "morning",
    "most", "mother", "mountain", "mouse", "mouth", "move", "mr", "mrs", "much", "mud", "must",
    "my", "myself", "nail", "name", "near", "neck", "need", "needle", "nest", "never", "new",
    "next", "nice", "night", "nine", "no", "nobody", "noise", "none", "noon", "nose", "not", "note",
    "nothing", "now", "number", "nut", "ocean", "of", "off", "office", "often", "oh", "old", "on",
    "once", "one", "only", "open", "or", "orange", "other", "our", "out", "outside", "over", "own",
    "page", "paint", "pair", "pan", "paper", "parade", "park", "part", "party", "pass", "paw",
    "pay", "peanut", "pen", "penny", "people", "pet", "pick", "picnic", "picture", "pie", "piece",
    "pig", "pin", "pipe", "place", "plan", "plane", "plant", "plate", "play", "please", "pocket",
    "point", "police", "pond", "pony", "pool", "poor", "pop", "post", "pot", "present", "pretty",
    "prince", "princess", "prize", "pull", "puppy", "push", "put", "queen", "quick", "quiet",
    "rabbit", "race", "radio", "rain", "ran", "rang", "reach", "read", "ready", "real", "red",
    "remember", "rest", "rich", "ride", "right", "ring", "river", "road", "robin", "rock", "rode",
    "roll", "roof", "room", "rope", "rose", "round", "row", "rub", "rug", "rule", "run", "sad",
    "safe", "said", "sail", "same", "sand", "sang", "sat", "save", "saw", "say", "school", "sea",
    "seat", "second", "see", "seed", "seem", "seen", "sell", "send", "sent", "set", "seven",
    "several", "shall", "shape", "she", "sheep", "shelf", "shine", "ship", "shirt", "shoe", "shop",
    "short", "should", "shout", "show", "shut", "sick", "side", "sign", "silly", "sing", "sister",
    "sit", "six", "size", "skate", "sky", "sleep", "slid", "slow", "small", "smell", "smile",
    "smoke", "snake", "snow", "so", "soft", "sold", "some", "someone", "something", "sometime",
    "son", "song", "soon", "sorry", "sound", "soup", "south", "space", "speak", "special", "spot",
    "spring", "squirrel", "stand", "star", "start", "station", "stay", "step", "stick", "still",
    "stone", "stood", "stop", "store", "story", "straight", "strange", "street", "string", "strong",
    "such", "sudden", "suddenly", "sugar", "summer", "sun", "supper", "suppose", "sure", "surprise",
    "swim", "swing", "table", "tail", "take", "talk", "tall", "teach", "teacher", "team", "teeth",
    "tell", "ten", "tent", "than", "thank", "that", "that's", "the", "their", "them", "then",
    "there", "these", "they", "thing", "think", "third", "this", "those", "though", "thought",
    "three", "threw", "through", "throw", "tie", "tiger", "time", "tiny", "to", "today", "toe",
    "together", "told", "tomorrow", "tonight", "too", "took", "tooth", "top", "touch", "town",
    "toy", "track", "train", "tree", "trick", "tried", "trip", "trouble", "truck", "true", "try",
    "turn", "turtle", "tv", "twelve", "two", "uncle", "under", "until", "up", "upon", "us", "use",
    "very", "visit", "voice", "wagon", "wait", "wake", "walk", "wall", "want", "war", "warm", "was",
    "wash", "watch", "water", "wave", "way", "we", "wear", "weather", "week", "well", "went",
    "were", "wet", "what", "wheel", "when", "where", "which", "while", "whistle", "white", "who",
    "whole", "why", "wide", "wife", "will", "win", "wind", "window", "wing", "winter", "wise",
    "wish", "with", "without", "woke", "wolf", "woman", "women", "won", "won't", "wood", "word",
    "wore", "work", "world", "would", "wouldn't", "write", "wrong", "wrote", "yard", "year", "yell",
    "yellow", "yes", "yesterday", "yet", "you", "young", "your", "yourself", "zoo",
];
