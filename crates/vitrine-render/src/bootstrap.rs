//! Runtime bootstrap for component documents.
//!
//! Transpile-time failures abort the render call; execution failures inside
//! the produced document must instead degrade into a visible inline error
//! block. The script emitted here owns that second tier: it runs the
//! transpiled module, resolves a mount candidate through a probe chain, and
//! traps every mount failure.
//!
//! The transpiled source is deliberately left at the top level of a classic
//! script (not wrapped in a function) so that `function App() {}` style
//! declarations become global bindings the probe chain can see.

/// Generate the mount script for a component document.
///
/// Probe order: the declared export name, a CommonJS-style default export,
/// the conventional `App` global, then the first function-valued global
/// whose name starts with an uppercase letter. When nothing resolves, an
/// inline warning is rendered instead of an error being thrown.
pub fn mount_script(transpiled: &str, declared: Option<&str>) -> String {
    // Declared names are validated as identifiers upstream; quoting them
    // keeps the lookup safe regardless.
    let declared_js = match declared {
        Some(name) => format!("\"{name}\""),
        None => "null".to_string(),
    };

    format!(
        r#"        var declaredComponent = {declared_js};

        function resolveComponent() {{
            if (declaredComponent && typeof window[declaredComponent] === 'function') {{
                return window[declaredComponent];
            }}
            if (typeof module !== 'undefined' && module.exports) {{
                var exported = module.exports.default || module.exports;
                if (typeof exported === 'function') {{
                    return exported;
                }}
            }}
            if (typeof App !== 'undefined') {{
                return App;
            }}
            var candidates = Object.keys(window).filter(function (key) {{
                return typeof window[key] === 'function' && key[0] === key[0].toUpperCase();
            }});
            return candidates.length > 0 ? window[candidates[0]] : null;
        }}

        try {{
{transpiled}

            var component = resolveComponent();
            if (component) {{
                ReactDOM.render(React.createElement(component), document.getElementById('root'));
            }} else {{
                document.getElementById('root').innerHTML =
                    '<div style="color: orange; padding: 20px;">No component found. Export your component or name it "App".</div>';
            }}
        }} catch (error) {{
            console.error('Rendering error:', error);
            document.getElementById('root').innerHTML =
                '<div style="color: red; padding: 20px; background: #fee; border: 1px solid #fcc; border-radius: 4px;"><strong>Error rendering component:</strong><br>' +
                (error && error.message ? error.message : String(error)) +
                '</div>';
        }}"#
    )
}
