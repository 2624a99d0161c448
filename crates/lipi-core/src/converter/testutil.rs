//! Shared sample text for the converter tests.

use std::sync::OnceLock;

use crate::scheme::DEFAULT_TOML;
use crate::{Options, Transliterator};

/// (scheme, sample, text)
const SAMPLES: &[(&str, &str, &str)] = &[
    ("bengali", "vowels", "অ আ ই ঈ উ ঊ ঋ ৠ ঌ ৡ এ ঐ ও ঔ"),
    ("bengali", "marks", "ক খা গি ঘী ঙু চূ ছৃ জৄ ঝৢ ঞৣ টে ঠৈ ডো ঢৌ ণং তঃ থ্"),
    ("bengali", "consonants", "ক খ গ ঘ ঙ চ ছ জ ঝ ঞ ট ঠ ড ঢ ণ ত থ দ ধ ন প ফ ব ভ ম"),
    ("bengali", "other", "য র ল ব শ ষ স হ ळ"),
    ("bengali", "symbols", "ॐ । ॥ ০ ১ ২ ৩ ৪ ৫ ৬ ৭ ৮ ৯"),
    ("bengali", "putra", "পুত্র"),
    ("bengali", "naraIti", "নর ইতি"),
    ("bengali", "sentence", "ধর্মক্ষেত্রে কুরুক্ষেত্রে সমবেতা যুযুত্সবঃ ।"),
    ("devanagari", "vowels", "अ आ इ ई उ ऊ ऋ ॠ ऌ ॡ ए ऐ ओ औ"),
    ("devanagari", "short_vowels", "ऎ ए ऒ ओ"),
    ("devanagari", "marks", "क खा गि घी ङु चू छृ जॄ झॢ ञॣ टे ठै डो ढौ णं तः थ्"),
    ("devanagari", "short_marks", "कॆ के कॊ को"),
    ("devanagari", "consonants", "क ख ग घ ङ च छ ज झ ञ ट ठ ड ढ ण त थ द ध न प फ ब भ म"),
    ("devanagari", "other", "य र ल व श ष स ह ळ"),
    ("devanagari", "symbols", "ॐ । ॥ ० १ २ ३ ४ ५ ६ ७ ८ ९"),
    ("devanagari", "putra", "पुत्र"),
    ("devanagari", "naraIti", "नर इति"),
    ("devanagari", "sentence", "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।"),
    ("gujarati", "vowels", "અ આ ઇ ઈ ઉ ઊ ઋ ૠ ઌ ૡ એ ઐ ઓ ઔ"),
    ("gujarati", "marks", "ક ખા ગિ ઘી ઙુ ચૂ છૃ જૄ ઝૢ ઞૣ ટે ઠૈ ડો ઢૌ ણં તઃ થ્"),
    ("gujarati", "consonants", "ક ખ ગ ઘ ઙ ચ છ જ ઝ ઞ ટ ઠ ડ ઢ ણ ત થ દ ધ ન પ ફ બ ભ મ"),
    ("gujarati", "other", "ય ર લ વ શ ષ સ હ ળ"),
    ("gujarati", "symbols", "ૐ ૤ ૥ ૦ ૧ ૨ ૩ ૪ ૫ ૬ ૭ ૮ ૯"),
    ("gujarati", "putra", "પુત્ર"),
    ("gujarati", "naraIti", "નર ઇતિ"),
    ("gujarati", "sentence", "ધર્મક્ષેત્રે કુરુક્ષેત્રે સમવેતા યુયુત્સવઃ ૤"),
    ("gurmukhi", "vowels", "ਅ ਆ ਇ ਈ ਉ ਊ ਏ ਐ ਓ ਔ"),
    ("gurmukhi", "marks", "ਕ ਖਾ ਗਿ ਘੀ ਙੁ ਚੂ ਟੇ ਠੈ ਡੋ ਢੌ ਣਂ ਤਃ ਥ੍"),
    ("gurmukhi", "consonants", "ਕ ਖ ਗ ਘ ਙ ਚ ਛ ਜ ਝ ਞ ਟ ਠ ਡ ਢ ਣ ਤ ਥ ਦ ਧ ਨ ਪ ਫ ਬ ਭ ਮ"),
    ("gurmukhi", "other", "ਯ ਰ ਲ ਵ ਸ਼ ਸ਼ ਸ ਹ ਲ਼"),
    ("gurmukhi", "symbols", "ॐ । ॥ ੦ ੧ ੨ ੩ ੪ ੫ ੬ ੭ ੮ ੯"),
    ("gurmukhi", "putra", "ਪੁਤ੍ਰ"),
    ("gurmukhi", "naraIti", "ਨਰ ਇਤਿ"),
    ("gurmukhi", "sentence", "ਧਰ੍ਮਕ੍ਸ਼ੇਤ੍ਰੇ ਕੁਰੁਕ੍ਸ਼ੇਤ੍ਰੇ ਸਮਵੇਤਾ ਯੁਯੁਤ੍ਸਵਃ ।"),
    ("hk", "vowels", "a A i I u U R RR lR lRR e ai o au"),
    ("hk", "marks", "ka khA gi ghI Gu cU chR jRR jhlR JlRR Te Thai Do Dhau NaM taH th"),
    ("hk", "consonants", "ka kha ga gha Ga ca cha ja jha Ja Ta Tha Da Dha Na ta tha da dha na pa pha ba bha ma"),
    ("hk", "other", "ya ra la va za Sa sa ha La"),
    ("hk", "symbols", "OM | || 0 1 2 3 4 5 6 7 8 9"),
    ("hk", "putra", "putra"),
    ("hk", "naraIti", "nara iti"),
    ("hk", "sentence", "dharmakSetre kurukSetre samavetA yuyutsavaH |"),
    ("iast", "vowels", "a ā i ī u ū ṛ ṝ ḷ ḹ e ai o au"),
    ("iast", "marks", "ka khā gi ghī ṅu cū chṛ jṝ jhḷ ñḹ ṭe ṭhai ḍo ḍhau ṇaṃ taḥ th"),
    ("iast", "consonants", "ka kha ga gha ṅa ca cha ja jha ña ṭa ṭha ḍa ḍha ṇa ta tha da dha na pa pha ba bha ma"),
    ("iast", "other", "ya ra la va śa ṣa sa ha ḻa"),
    ("iast", "symbols", "oṃ । ॥ 0 1 2 3 4 5 6 7 8 9"),
    ("iast", "putra", "putra"),
    ("iast", "naraIti", "nara iti"),
    ("iast", "sentence", "dharmakṣetre kurukṣetre samavetā yuyutsavaḥ ।"),
    ("itrans", "vowels", "a A i I u U RRi RRI LLi LLI e ai o au"),
    ("itrans", "marks", "ka khA gi ghI ~Nu chU ChRRi jRRI jhLLi ~nLLI Te Thai Do Dhau NaM taH th"),
    ("itrans", "consonants", "ka kha ga gha ~Na cha Cha ja jha ~na Ta Tha Da Dha Na ta tha da dha na pa pha ba bha ma"),
    ("itrans", "other", "ya ra la va sha Sha sa ha La"),
    ("itrans", "symbols", "OM | || 0 1 2 3 4 5 6 7 8 9"),
    ("itrans", "putra", "putra"),
    ("itrans", "naraIti", "nara iti"),
    ("itrans", "sentence", "dharmakShetre kurukShetre samavetA yuyutsavaH |"),
    ("itrans_dravidian", "short_vowels", "e E o O"),
    ("itrans_dravidian", "short_marks", "ke kE ko kO"),
    ("kolkata", "short_vowels", "e ē o ō"),
    ("kolkata", "short_marks", "ke kē ko kō"),
    ("kannada", "vowels", "ಅ ಆ ಇ ಈ ಉ ಊ ಋ ೠ ಌ ೡ ಏ ಐ ಓ ಔ"),
    ("kannada", "short_vowels", "ಎ ಏ ಒ ಓ"),
    ("kannada", "marks", "ಕ ಖಾ ಗಿ ಘೀ ಙು ಚೂ ಛೃ ಜೄ ಝೢ ಞೣ ಟೇ ಠೈ ಡೋ ಢೌ ಣಂ ತಃ ಥ್"),
    ("kannada", "short_marks", "ಕೆ ಕೇ ಕೊ ಕೋ"),
    ("kannada", "consonants", "ಕ ಖ ಗ ಘ ಙ ಚ ಛ ಜ ಝ ಞ ಟ ಠ ಡ ಢ ಣ ತ ಥ ದ ಧ ನ ಪ ಫ ಬ ಭ ಮ"),
    ("kannada", "other", "ಯ ರ ಲ ವ ಶ ಷ ಸ ಹ ಳ"),
    ("kannada", "symbols", "ಓಂ । ॥ ೦ ೧ ೨ ೩ ೪ ೫ ೬ ೭ ೮ ೯"),
    ("kannada", "putra", "ಪುತ್ರ"),
    ("kannada", "naraIti", "ನರ ಇತಿ"),
    ("kannada", "sentence", "ಧರ್ಮಕ್ಷೇತ್ರೇ ಕುರುಕ್ಷೇತ್ರೇ ಸಮವೇತಾ ಯುಯುತ್ಸವಃ ।"),
    ("malayalam", "vowels", "അ ആ ഇ ഈ ഉ ഊ ഋ ൠ ഌ ൡ ഏ ഐ ഓ ഔ"),
    ("malayalam", "short_vowels", "എ ഏ ഒ ഓ"),
    ("malayalam", "marks", "ക ഖാ ഗി ഘീ ങു ചൂ ഛൃ ജൄ ഝൢ ഞൣ ടേ ഠൈ ഡോ ഢൌ ണം തഃ ഥ്"),
    ("malayalam", "short_marks", "കെ കേ കൊ കോ"),
    ("malayalam", "consonants", "ക ഖ ഗ ഘ ങ ച ഛ ജ ഝ ഞ ട ഠ ഡ ഢ ണ ത ഥ ദ ധ ന പ ഫ ബ ഭ മ"),
    ("malayalam", "other", "യ ര ല വ ശ ഷ സ ഹ ള"),
    ("malayalam", "symbols", "ഓം । ॥ ൦ ൧ ൨ ൩ ൪ ൫ ൬ ൭ ൮ ൯"),
    ("malayalam", "putra", "പുത്ര"),
    ("malayalam", "naraIti", "നര ഇതി"),
    ("malayalam", "sentence", "ധര്മക്ഷേത്രേ കുരുക്ഷേത്രേ സമവേതാ യുയുത്സവഃ ।"),
    ("oriya", "vowels", "ଅ ଆ ଇ ଈ ଉ ଊ ଋ ୠ ଌ ୡ ଏ ଐ ଓ ଔ"),
    ("oriya", "marks", "କ ଖା ଗି ଘୀ ଙୁ ଚୂ ଛୃ ଜୄ ଟେ ଠୈ ଡୋ ଢୌ ଣଂ ତଃ ଥ୍"),
    ("oriya", "consonants", "କ ଖ ଗ ଘ ଙ ଚ ଛ ଜ ଝ ଞ ଟ ଠ ଡ ଢ ଣ ତ ଥ ଦ ଧ ନ ପ ଫ ବ ଭ ମ"),
    ("oriya", "other", "ଯ ର ଲ ଵ ଶ ଷ ସ ହ ଳ"),
    ("oriya", "symbols", "ଓଂ । ॥ ୦ ୧ ୨ ୩ ୪ ୫ ୬ ୭ ୮ ୯"),
    ("oriya", "putra", "ପୁତ୍ର"),
    ("oriya", "naraIti", "ନର ଇତି"),
    ("oriya", "sentence", "ଧର୍ମକ୍ଷେତ୍ରେ କୁରୁକ୍ଷେତ୍ରେ ସମଵେତା ଯୁଯୁତ୍ସଵଃ ।"),
    ("tamil", "short_vowels", "எ ஏ ஒ ஓ"),
    ("tamil", "short_marks", "கெ கே கொ கோ"),
    ("telugu", "vowels", "అ ఆ ఇ ఈ ఉ ఊ ఋ ౠ ఌ ౡ ఏ ఐ ఓ ఔ"),
    ("telugu", "short_vowels", "ఎ ఏ ఒ ఓ"),
    ("telugu", "marks", "క ఖా గి ఘీ ఙు చూ ఛృ జౄ ఝౢ ఞౣ టే ఠై డో ఢౌ ణం తః థ్"),
    ("telugu", "short_marks", "కె కే కొ కో"),
    ("telugu", "consonants", "క ఖ గ ఘ ఙ చ ఛ జ ఝ ఞ ట ఠ డ ఢ ణ త థ ద ధ న ప ఫ బ భ మ"),
    ("telugu", "other", "య ర ల వ శ ష స హ ళ"),
    ("telugu", "symbols", "ఓం । ॥ ౦ ౧ ౨ ౩ ౪ ౫ ౬ ౭ ౮ ౯"),
    ("telugu", "putra", "పుత్ర"),
    ("telugu", "naraIti", "నర ఇతి"),
    ("telugu", "sentence", "ధర్మక్షేత్రే కురుక్షేత్రే సమవేతా యుయుత్సవః ।"),
    ("wx", "consonants", "ka Ka ga Ga fa ca Ca ja Ja Fa ta Ta da Da Na wa Wa xa Xa na pa Pa ba Ba ma"),
    ("wx", "symbols", "oM | || 0 1 2 3 4 5 6 7 8 9"),
    ("wx", "putra", "puwra"),
    ("wx", "naraIti", "nara iwi"),
    ("wx", "sentence", "XarmakRewre kurukRewre samavewA yuyuwsavaH |"),
];

/// Sample `key` written in `scheme`.
pub(super) fn sample(scheme: &str, key: &str) -> &'static str {
    SAMPLES
        .iter()
        .find(|(s, k, _)| *s == scheme && *k == key)
        .map(|(_, _, text)| *text)
        .unwrap_or_else(|| panic!("no sample {key} for {scheme}"))
}

/// Engine over the default scheme table, shared by all tests.
pub(super) fn engine() -> &'static Transliterator {
    static ENGINE: OnceLock<Transliterator> = OnceLock::new();
    ENGINE.get_or_init(|| Transliterator::from_toml(DEFAULT_TOML).unwrap())
}

pub(super) fn t(input: &str, from: &str, to: &str) -> String {
    t_with(input, from, to, Options::default())
}

pub(super) fn t_with(input: &str, from: &str, to: &str, options: Options) -> String {
    engine().transliterate(input, from, to, options).unwrap()
}

/// Convert `sample(from, key)` and compare it with `sample(to, key)`.
#[track_caller]
pub(super) fn assert_sample(from: &str, to: &str, key: &str) {
    assert_eq!(
        t(sample(from, key), from, to),
        sample(to, key),
        "{key}: {from} -> {to}"
    );
}

/// Letters and symbols.
#[track_caller]
pub(super) fn assert_letters(from: &str, to: &str) {
    for key in ["vowels", "marks", "consonants", "other", "symbols"] {
        assert_sample(from, to, key);
    }
}

/// Words and sentences.
#[track_caller]
pub(super) fn assert_text(from: &str, to: &str) {
    for key in ["putra", "naraIti", "sentence"] {
        assert_sample(from, to, key);
    }
}
