//! C header and source files declaring the generated tables.
//!
//! The output is consumed by the heatmap library, which supplies
//! `heatmap_colorscheme_t` (a data pointer and a color count).

use std::io::{self, Write};
use crate::Error;
use crate::sampler::{ColorSchemeTable, Sampler};

/// Banner written at the top of both generated files.
pub const LICENSE: &str = "\
/* heatmap - High performance heatmap creation in C.
 *
 * The MIT License (MIT)
 *
 * Copyright (c) 2013 Lucas Beyer
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the \"Software\"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
 * FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
 * COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
 * IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
 * CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 */

";

/// Check that `name` can be pasted into C identifiers.
pub fn check_name(name: &str) -> Result<(), Error> {
    let mut chars = name.chars();
    let ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok { Ok(()) } else { Err(Error::InvalidName(name.to_string())) }
}

/// One-line C comment describing each table in the header.
fn description(s: Sampler) -> &'static str {
    match s {
        Sampler::Discrete => "/* This one has only N discrete colors. */",
        Sampler::Soft => "/* This is a very soft gradient along abovementioned \
                          discrete colors. */",
        Sampler::Mixed => "/* This is a mix of the above two. Makes for a \
                           pretty result in many cases. */",
        Sampler::MixedExp => "/* An exponential version of the default mix of \
                              the above two. */\n\
                              /* Use this if your maximum is very \"spiked\". */",
    }
}

/// Write `<name>.h`, declaring the four colorscheme handles.
pub fn write_header(fh: &mut impl Write, name: &str) -> io::Result<()> {
    let guard = format!("_HEATMAP_COLORSCHEMES_{}_H", name.to_ascii_uppercase());
    write!(fh, "{LICENSE}")?;
    writeln!(fh, "#ifndef {guard}\n\
                  #define {guard}\n\
                  \n\
                  #ifdef __cplusplus\n\
                  extern \"C\" {{\n\
                  #endif\n")?;
    for s in Sampler::ALL {
        writeln!(fh, "{}\n\
                      extern const heatmap_colorscheme_t* heatmap_cs_{name}_{};",
                 description(s), s.name())?;
    }
    writeln!(fh, "\n\
                  #ifdef __cplusplus\n\
                  }}\n\
                  #endif\n\
                  \n\
                  #endif /* {guard} */")?;
    Ok(())
}

/// Write `<name>.c`, defining the data arrays and handles of `tables`.
pub fn write_source(fh: &mut impl Write, name: &str,
                    tables: &[(Sampler, ColorSchemeTable)]) -> io::Result<()> {
    write!(fh, "{LICENSE}")?;
    writeln!(fh, "#ifdef __cplusplus\n\
                  extern \"C\" {{\n\
                  #endif\n\
                  \n\
                  #include \"heatmap.h\"\n\
                  #include \"colorschemes/{name}.h\"\n")?;
    for (s, table) in tables {
        write_block(fh, name, *s, table)?;
    }
    writeln!(fh, "#ifdef __cplusplus\n\
                  }}\n\
                  #endif")?;
    Ok(())
}

fn write_block(fh: &mut impl Write, name: &str, s: Sampler,
               table: &ColorSchemeTable) -> io::Result<()> {
    let var = s.name();
    writeln!(fh, "static const unsigned char {var}_data[] = {{")?;
    write!(fh, "    ")?;
    for (i, c) in table.samples().iter().enumerate() {
        let sep = if i == 0 { "" } else { ", " };
        write!(fh, "{sep}{}, {}, {}, {}", c.r, c.g, c.b, c.a)?;
    }
    // Historical `sizeof` expression, reproduced verbatim.
    writeln!(fh, "\n}};\n\
                  static const heatmap_colorscheme_t {var} = {{ {var}_data, \
                  sizeof({var}_data)/sizeof({var}_data[0]/4) }};\n\
                  const heatmap_colorscheme_t* heatmap_cs_{name}_{var} = &{var};\n")?;
    Ok(())
}
