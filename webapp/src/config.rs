// site configuration
//
// everything here is fixed at compile time; there is no runtime config source for a static page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    // shown in the footer copyright line
    pub owner: &'static str,

    pub logo_url: &'static str,
    pub logo_alt: &'static str,

    pub music: MusicConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MusicConfig {
    pub url: &'static str,
    pub volume: f64,
    pub looping: bool,
    pub credit: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: "ARPilotYT",
    logo_url: "https://cdn.discordapp.com/attachments/1293670005535277067/1397029017911169034/A234A258-C0D4-4B67-BFF6-E5AD2120C47C.png?ex=6880e4e9&is=687f9369&hm=11804c3f8d15b0027e25d097c452085b96297562c2ec44544aca3592c728f0c0&",
    logo_alt: "Logo",
    music: MusicConfig {
        url: "https://cdn.pixabay.com/download/audio/2022/07/16/audio_d7b8e5e7a4.mp3?filename=night-horizon-113135.mp3",
        volume: 0.25,
        looping: true,
        credit: "Background music: Still being worked on.",
    },
};
