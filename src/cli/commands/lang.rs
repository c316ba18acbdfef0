use crate::i18n::Language;
use crate::state::AppState;

pub async fn cmd_lang(state: &mut AppState, code: Option<&str>) -> anyhow::Result<()> {
    let Some(code) = code else {
        println!(
            "{}",
            state.t_with("currentLanguage", &[("language", state.translator.language().code())])
        );
        return Ok(());
    };

    let Some(language) = Language::from_code(code) else {
        println!("{}", state.t_with("invalidLanguage", &[("language", code)]));
        return Ok(());
    };

    state.change_language(language).await?;

    println!(
        "{}",
        state.t_with("languageChanged", &[("language", language.code())])
    );
    if state.config.general.language.is_some() {
        // config wins on the next start
        println!("Note: general.language in config.toml overrides the saved preference");
    }
    Ok(())
}
