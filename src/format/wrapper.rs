//! Declaration dialects that wrap a rendered array body.

/// Language boilerplate placed around the array body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Plain `const uint8_t` array.
    Bare,
    /// C header with an include guard.
    C,
    /// Arduino header: `#pragma once` and a `PROGMEM` array.
    #[default]
    Arduino,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Bare => "bare",
            Dialect::C => "c",
            Dialect::Arduino => "arduino",
        }
    }

    /// Extension of files generated without an explicit output name.
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::Arduino => "hpp",
            Dialect::Bare | Dialect::C => "h",
        }
    }

    /// Wrap `body` into a complete declaration of array `var`.
    pub fn wrap(&self, var: &str, body: &str) -> String {
        let mut out = match self {
            Dialect::Bare => format!("const uint8_t {}[] = {{", var),
            Dialect::C => {
                let guard = format!("{}_H", var.to_uppercase());
                format!(
                    "#ifndef {guard}\n#define {guard}\nconst unsigned char {}[] = {{",
                    var
                )
            }
            Dialect::Arduino => format!("#pragma once\n\nconst uint8_t {}[] PROGMEM = {{", var),
        };

        if !body.is_empty() {
            out.push('\n');
            out.push_str(body);
        }
        out.push_str("\n};\n");

        if *self == Dialect::C {
            out.push_str("#endif\n");
        }
        out
    }
}
