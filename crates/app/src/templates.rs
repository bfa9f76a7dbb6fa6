//! Text templates for generated app bundles. `{key}` placeholders are filled
//! by [`render`]; `MAIN_JS` is written verbatim.

pub const CHROME_MANIFEST_LINK: &str = "manifest chrome/chrome.manifest";

pub const CHROME_MANIFEST: &str = "content {name} content/";

pub const APPLICATION_INI: &str = "\
[App]
Vendor={vendor}
Name={name}
Version={version}
BuildID={buildid}
ID={id}
Profile={profilename}

[Gecko]
MinVersion=1.8
MaxVersion=200.*
";

pub const MAIN_XUL: &str = r#"<?xml version="1.0"?>
<?xml-stylesheet href="chrome://global/skin/" type="text/css"?>

<window
    xmlns="http://www.mozilla.org/keymaster/gatekeeper/there.is.only.xul"
    id="{windowid}"
    title="{title}"
    windowtype="thisapp:main"
    width="640"
    height="480"
    sizemode="{sizemode}"
    onclose="quit();"
    >
    <script type="application/javascript"
            src="chrome://{name}/content/main.js" />
    <browser src="{url}"
             id="content"
             type="content"
             flex="1"
             disablehistory="true" />
</window>
"#;

pub const MAIN_JS: &str = r#"// Called when the main window closes.
function quit() {
    var appStartup = Components.classes["@mozilla.org/toolkit/app-startup;1"]
                               .getService(Components.interfaces.nsIAppStartup);
    appStartup.quit(Components.interfaces.nsIAppStartup.eAttemptQuit);
}
"#;

pub const PREFS_JS: &str = r#"// Chrome document the runtime opens on start
pref("toolkit.defaultChromeURI", "chrome://{name}/content/main.xul");

// Needed for window.open
pref("browser.chromeURL", "chrome://{name}/content/main.xul");

// Window features: size, position, resizability
pref("toolkit.defaultChromeFeatures", "{windowfeatures}");

pref("browser.dom.window.dump.enabled", false);
pref("javascript.options.showInConsole", false);
pref("javascript.options.strict", false);
pref("nglayout.debug.disable_xul_cache", false);
pref("nglayout.debug.disable_xul_fastload", false);
"#;

/// Replace every `{key}` in `template` with its value. Unknown placeholders
/// are left as they are.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
