//! Static fallback catalog
//!
//! Three hand-authored templates per supported language; the topic is
//! spliced in at the `{topic}` marker of each description. Lookup is
//! total and the component cannot fail: an unknown set falls back to
//! English, and an empty topic is replaced by the language's
//! placeholder noun before interpolation.

use super::language::Lang;
use super::models::Item;

/// One authored template. `desc` contains a single `{topic}` marker.
struct Template {
    title: &'static str,
    desc: &'static str,
}

const TOPIC_MARKER: &str = "{topic}";

/// Placeholder noun used when the topic is empty.
fn placeholder(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "it",
        Lang::Ja => "それ",
        Lang::Zh => "它",
        Lang::Hi => "यह",
        Lang::Es => "eso",
        Lang::Fr => "ça",
        Lang::Ar => "ذلك",
        Lang::Bn => "ওটা",
        Lang::Pt => "isso",
        Lang::Ru => "это",
        Lang::Ur => "یہ",
        Lang::Id => "itu",
        Lang::De => "das",
        Lang::Sw => "hicho",
        Lang::Mr => "ते",
        Lang::Te => "అది",
        Lang::Tr => "o",
        Lang::Ta => "அது",
        Lang::Vi => "nó",
        Lang::Ko => "그것",
    }
}

static EN: [Template; 3] = [
    Template {
        title: "Reboot button for humans",
        desc: "If you don’t press it in the morning, your day freezes. — {topic} is just playing that role.",
    },
    Template {
        title: "Emergency exit from boredom",
        desc: "A device to bail out whenever stuck. In short, {topic} is another name for “Emergency exit from boredom”.",
    },
    Template {
        title: "Band-aid for motivation",
        desc: "Not a cure, but you can move now. That is exactly what people expect from {topic}.",
    },
];

static JA: [Template; 3] = [
    Template {
        title: "人間用の再起動ボタン",
        desc: "朝に押さないと、一日じゅうフリーズする。— {topic}がその役をやっているだけ。",
    },
    Template {
        title: "退屈の非常口",
        desc: "困ったらそこから脱出できる装置。要するに{topic}は「退屈の非常口」の別名。",
    },
    Template {
        title: "やる気の絆創膏",
        desc: "根本治療はしないが、今は動けるようにする。{topic}に期待されているのは、だいたいこれ。",
    },
];

static ZH: [Template; 3] = [
    Template {
        title: "人类的重启按钮",
        desc: "早上不按，一天就卡住——{topic}只是在扮演这个角色。",
    },
    Template {
        title: "无聊的紧急出口",
        desc: "卡住时的逃生装置。简而言之，{topic}就是“无聊的紧急出口”的别名。",
    },
    Template {
        title: "动力的创可贴",
        desc: "不是根治，但能先动起来。人们对{topic}的期待大致如此。",
    },
];

static HI: [Template; 3] = [
    Template {
        title: "मानवों का रीबूट बटन",
        desc: "सुबह इसे न दबाओ तो दिन फ्रीज़ हो जाता है — {topic} बस वही किरदार निभाता है।",
    },
    Template {
        title: "ऊब का इमरजेंसी एग्ज़िट",
        desc: "फँसने पर बाहर निकलने का यंत्र। संक्षेप में, {topic} इसी का दूसरा नाम है।",
    },
    Template {
        title: "मोटिवेशन की पट्टी",
        desc: "इलाज नहीं, पर अभी चल पड़ने लायक बनाता है। {topic} से यही अपेक्षा रहती है।",
    },
];

static ES: [Template; 3] = [
    Template {
        title: "Botón de reinicio humano",
        desc: "Si no lo pulsas por la mañana, el día se cuelga — {topic} solo cumple ese papel.",
    },
    Template {
        title: "Salida de emergencia del aburrimiento",
        desc: "Un dispositivo para escapar cuando te atascas. En resumen, {topic} es otro nombre de ello.",
    },
    Template {
        title: "Tirita de motivación",
        desc: "No cura, pero te pone en marcha. Eso es lo que se espera de {topic}.",
    },
];

static FR: [Template; 3] = [
    Template {
        title: "Bouton de redémarrage humain",
        desc: "Sans appuyer le matin, la journée se fige — {topic} ne fait que jouer ce rôle.",
    },
    Template {
        title: "Issue de secours contre l’ennui",
        desc: "Un dispositif pour s’échapper quand on bloque. En bref, {topic} en est l’autre nom.",
    },
    Template {
        title: "Pansement de motivation",
        desc: "Pas un remède, mais ça remet en mouvement. C’est ce qu’on attend de {topic}.",
    },
];

static AR: [Template; 3] = [
    Template {
        title: "زر إعادة تشغيل للبشر",
        desc: "إن لم تضغطه صباحاً تتجمّد يومك — {topic} يقوم بهذا الدور فحسب.",
    },
    Template {
        title: "مخرج طوارئ من الملل",
        desc: "جهاز للهروب عند التعطّل. باختصار، {topic} اسم آخر له.",
    },
    Template {
        title: "ضمادة للدافعية",
        desc: "ليس علاجاً جذرياً لكنه يجعلك تتحرّك الآن. هذا ما يُتوقّع من {topic}.",
    },
];

static BN: [Template; 3] = [
    Template {
        title: "মানুষের রিবুট বোতাম",
        desc: "সকালে না চাপলে দিন হ্যাং হয় — {topic} শুধু সেই ভূমিকাই করছে।",
    },
    Template {
        title: "একঘেয়েমির জরুরি বহির্গমন",
        desc: "আটকে গেলে বেরিয়ে আসার যন্ত্র। সংক্ষেপে, {topic} এরই আরেক নাম।",
    },
    Template {
        title: "মোটিভেশনের ব্যান্ড-এড",
        desc: "আরোগ্য নয়, এখন চলতে সাহায্য করে। {topic} থেকে এটিই প্রত্যাশা।",
    },
];

static PT: [Template; 3] = [
    Template {
        title: "Botão de reinício humano",
        desc: "Se não apertar de manhã, o dia trava — {topic} só faz esse papel.",
    },
    Template {
        title: "Saída de emergência do tédio",
        desc: "Um dispositivo para escapar quando trava. Em resumo, {topic} é outro nome disso.",
    },
    Template {
        title: "Curativo de motivação",
        desc: "Não cura, mas te coloca em movimento. É isso que se espera de {topic}.",
    },
];

static RU: [Template; 3] = [
    Template {
        title: "Кнопка перезагрузки для людей",
        desc: "Если утром не нажать — день зависнет. {topic} лишь играет эту роль.",
    },
    Template {
        title: "Аварийный выход из скуки",
        desc: "Устройство для побега, когда застрял. Проще говоря, {topic} — другое название этого.",
    },
    Template {
        title: "Пластырь мотивации",
        desc: "Не лечит, но заставляет двигаться. Этого и ждут от {topic}.",
    },
];

static UR: [Template; 3] = [
    Template {
        title: "انسانوں کا ری بوٹ بٹن",
        desc: "صبح نہ دباؤ تو دن جم جاتا ہے — {topic} بس یہی کردار ادا کرتا ہے۔",
    },
    Template {
        title: "بوریت کا ایمرجنسی ایگزٹ",
        desc: "اٹکنے پر نکلنے کی ترکیب۔ مختصراً، {topic} اسی کا دوسرا نام ہے۔",
    },
    Template {
        title: "حوصلہ افزائی کی پٹی",
        desc: "علاج نہیں مگر ابھی حرکت دلاتی ہے۔ {topic} سے یہی توقع ہے۔",
    },
];

static ID: [Template; 3] = [
    Template {
        title: "Tombol reboot manusia",
        desc: "Kalau pagi tidak ditekan, seharian nge-freeze — {topic} cuma berperan seperti itu.",
    },
    Template {
        title: "Pintu darurat dari bosan",
        desc: "Perangkat untuk kabur saat buntu. Singkatnya, {topic} adalah nama lain dari itu.",
    },
    Template {
        title: "Plester motivasi",
        desc: "Bukan obat tuntas, tapi bikin bergerak sekarang. Itulah yang diharapkan dari {topic}.",
    },
];

static DE: [Template; 3] = [
    Template {
        title: "Neustartknopf für Menschen",
        desc: "Drückst du ihn morgens nicht, friert der Tag ein — {topic} erfüllt nur diese Rolle.",
    },
    Template {
        title: "Notausgang aus der Langeweile",
        desc: "Ein Gerät zum Aussteigen, wenn man feststeckt. Kurz: {topic} ist ein anderer Name dafür.",
    },
    Template {
        title: "Motivations-Pflaster",
        desc: "Keine Heilung, aber man kommt in Gang. Das erwartet man von {topic}.",
    },
];

static SW: [Template; 3] = [
    Template {
        title: "Kitufe cha kuwasha upya binadamu",
        desc: "Usipokibonyeza asubuhi, siku inagandia — {topic} hufanya tu jukumu hilo.",
    },
    Template {
        title: "Mlango wa dharura kutoka kwenye kuchoka",
        desc: "Kifaa cha kutoroka unapokwama. Kwa kifupi, {topic} ni jina lingine la hilo.",
    },
    Template {
        title: "Plasta ya motisha",
        desc: "Si tiba, lakini inakuweka uwanjani sasa. Hicho ndicho kinachotarajiwa kutoka kwa {topic}.",
    },
];

static MR: [Template; 3] = [
    Template {
        title: "माणसांचा रिबूट बटण",
        desc: "सकाळी दाबलं नाही तर दिवस हँग होतो — {topic} फक्त तीच भूमिका बजावतो.",
    },
    Template {
        title: "कंटाळ्याचा इमर्जन्सी एक्झिट",
        desc: "अडकले की बाहेर काढणारे साधन. थोडक्यात, {topic} त्याचं दुसरं नाव.",
    },
    Template {
        title: "मोटिवेशनची पट्टी",
        desc: "उपचार नाही, पण आत्ता चालना देते. {topic} कडून हेच अपेक्षित.",
    },
];

static TE: [Template; 3] = [
    Template {
        title: "మనుషుల రీబూట్ బటన్",
        desc: "ఉదయం నొక్కకపోతే రోజు ఫ్రీజ్ అవుతుంది — {topic} ఆ పాత్రనే పోషిస్తుంది.",
    },
    Template {
        title: "బోర్‌కు ఎమర్జెన్సీ ఎగ్జిట్",
        desc: "అరుస్తే బయటకు లాగే పరికరం. మొత్తం మీద, {topic} అదే పేరుకు మరో రూపం.",
    },
    Template {
        title: "మోటివేషన్ ప్లాస్టర్",
        desc: "చికిత్స కాదు, ఇప్పుడే కదలిస్తుంది. {topic} నుండి అదే ఆశిస్తారు.",
    },
];

static TR: [Template; 3] = [
    Template {
        title: "İnsanlar için yeniden başlatma düğmesi",
        desc: "Sabah basmazsan gün donar — {topic} sadece bu rolü oynar.",
    },
    Template {
        title: "Sıkıntıdan acil çıkış",
        desc: "Sıkışınca kaçış aygıtı. Kısacası, {topic} bunun başka adıdır.",
    },
    Template {
        title: "Motivasyon bandı",
        desc: "Tedavi değil ama harekete geçirir. {topic}’den beklenen budur.",
    },
];

static TA: [Template; 3] = [
    Template {
        title: "மனிதருக்கான ரீபூட் பொத்தான்",
        desc: "காலை அழுத்தாவிட்டால் நாள் உறையும் — {topic} அந்த வேடம்தான் செய்கிறது.",
    },
    Template {
        title: "சலிப்பிலிருந்து அவசர வெளியேறு",
        desc: "சிக்கும்போது தப்பிக்கச் செய்கிறது. சுருக்கமாக, {topic} அதற்கே இன்னொரு பெயர்.",
    },
    Template {
        title: "மோட்டிவேஷன் பேண்ட்ஏய்ட்",
        desc: "சிகிச்சை அல்ல, இப்போது நகர்த்தும். {topic} மீது இதுவே எதிர்பார்ப்பு.",
    },
];

static VI: [Template; 3] = [
    Template {
        title: "Nút khởi động lại cho con người",
        desc: "Sáng không bấm là cả ngày đứng hình — {topic} chỉ đang đóng vai ấy thôi.",
    },
    Template {
        title: "Lối thoát khẩn cấp khỏi buồn chán",
        desc: "Thiết bị để thoát ra khi mắc kẹt. Nói ngắn gọn, {topic} là tên gọi khác của nó.",
    },
    Template {
        title: "Băng dán động lực",
        desc: "Không chữa dứt điểm, nhưng giúp chạy ngay. Người ta mong ở {topic} điều đó.",
    },
];

static KO: [Template; 3] = [
    Template {
        title: "사람을 위한 재부팅 버튼",
        desc: "아침에 누르지 않으면 하루가 얼어붙는다 — {topic}는 그 역할만 한다.",
    },
    Template {
        title: "지루함의 비상구",
        desc: "막힐 때 빠져나오는 장치. 한마디로, {topic}의 다른 이름이다.",
    },
    Template {
        title: "동기부여 반창고",
        desc: "치료는 아니지만 지금 움직이게 한다. {topic}에 기대하는 바가 그것.",
    },
];

/// Authored template set for a language. The match is exhaustive over
/// [`Lang`], so the lookup can never miss; a code added without an
/// authored set must point at `EN` until its set lands.
fn templates(lang: Lang) -> &'static [Template; 3] {
    match lang {
        Lang::En => &EN,
        Lang::Ja => &JA,
        Lang::Zh => &ZH,
        Lang::Hi => &HI,
        Lang::Es => &ES,
        Lang::Fr => &FR,
        Lang::Ar => &AR,
        Lang::Bn => &BN,
        Lang::Pt => &PT,
        Lang::Ru => &RU,
        Lang::Ur => &UR,
        Lang::Id => &ID,
        Lang::De => &DE,
        Lang::Sw => &SW,
        Lang::Mr => &MR,
        Lang::Te => &TE,
        Lang::Tr => &TR,
        Lang::Ta => &TA,
        Lang::Vi => &VI,
        Lang::Ko => &KO,
    }
}

/// Produce the three fallback items for a language, topic spliced in.
///
/// Pure function: identical inputs always yield identical output.
pub fn fallback_items(lang: Lang, topic: &str) -> Vec<Item> {
    let topic = if topic.is_empty() { placeholder(lang) } else { topic };
    templates(lang)
        .iter()
        .map(|template| Item {
            title: template.title.to_string(),
            desc: template.desc.replace(TOPIC_MARKER, topic),
        })
        .collect()
}
