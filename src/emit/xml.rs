//! XML output.
//!
//! ```text
//! <SBOM>
//!   <Modules>
//!     <Module>
//!       <Name>..</Name>
//!       <Source>..</Source>
//!       <Version>..</Version>
//!       <ConfigPath>..</ConfigPath>
//!     </Module>
//!   </Modules>
//! </SBOM>
//! ```
//!
//! No XML declaration is written. The file is always replaced.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::constants;
use crate::error::{Error, IoOperation, Result};
use crate::sbom::{ModuleRecord, Sbom};

/// Renders `sbom` as an indented XML document with a trailing newline.
///
/// # Errors
///
/// Only fails if the in-memory writer reports an error.
pub fn render(sbom: &Sbom) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', constants::INDENT_WIDTH);

    start(&mut writer, constants::XML_ROOT)?;
    if sbom.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(constants::XML_MODULES)))
            .map_err(xml_err)?;
    } else {
        start(&mut writer, constants::XML_MODULES)?;
        for record in sbom.modules() {
            module(&mut writer, record)?;
        }
        end(&mut writer, constants::XML_MODULES)?;
    }
    end(&mut writer, constants::XML_ROOT)?;

    let mut out = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
    out.push('\n');
    Ok(out)
}

/// Writes `sbom` to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write(sbom: &Sbom, path: &Path) -> Result<()> {
    let content = render(sbom).map_err(|e| Error::io(IoOperation::Write, path, e))?;
    fs::write(path, content).map_err(|e| Error::io(IoOperation::Create, path, e))
}

fn module(writer: &mut Writer<Vec<u8>>, record: &ModuleRecord) -> io::Result<()> {
    start(writer, constants::XML_MODULE)?;
    text_element(writer, "Name", &record.name)?;
    text_element(writer, "Source", &record.source)?;
    text_element(writer, "Version", &record.version)?;
    text_element(writer, "ConfigPath", &record.config_path)?;
    end(writer, constants::XML_MODULE)
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> io::Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> io::Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))
        .map_err(xml_err)?;
    Ok(())
}

fn xml_err<E: fmt::Display>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom::fixtures::{record, sample_sbom, CONFIG_PATH, VPC_SOURCE};
    use pretty_assertions::assert_eq;
    use quick_xml::Reader;
    use tempfile::TempDir;

    /// Text content of every `<tag>` element, unescaped.
    fn element_texts(xml: &str, tag: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut current: Option<Vec<u8>> = None;
        let mut texts = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) => current = Some(e.name().as_ref().to_vec()),
                Event::Text(t) if current.as_deref() == Some(tag.as_bytes()) => {
                    texts.push(t.unescape().unwrap().into_owned());
                }
                Event::End(_) => current = None,
                Event::Eof => break,
                _ => {}
            }
        }
        texts
    }

    #[test]
    fn test_render_layout() {
        let expected = format!(
            "<SBOM>
  <Modules>
    <Module>
      <Name>aws_vpc</Name>
      <Source>{VPC_SOURCE}</Source>
      <Version>v2.0.0</Version>
      <ConfigPath>{CONFIG_PATH}</ConfigPath>
    </Module>
    <Module>
      <Name>s3_bucket</Name>
      <Source>hashicorp/aws</Source>
      <Version>N/A</Version>
      <ConfigPath>{CONFIG_PATH}</ConfigPath>
    </Module>
  </Modules>
</SBOM>
"
        );
        assert_eq!(render(&sample_sbom()).unwrap(), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Sbom::default()).unwrap(), "<SBOM>\n  <Modules/>\n</SBOM>\n");
    }

    #[test]
    fn test_render_escapes_text() {
        let sbom = Sbom::new(vec![record(
            "odd",
            "git::https://x/y.git?ref=v1&depth=1",
            "v1&depth=1",
            "<cfg>",
        )]);
        let xml = render(&sbom).unwrap();
        assert!(xml.contains("<Source>git::https://x/y.git?ref=v1&amp;depth=1</Source>"));
        assert!(xml.contains("<ConfigPath>&lt;cfg&gt;</ConfigPath>"));
        assert_eq!(
            element_texts(&xml, "Source"),
            vec!["git::https://x/y.git?ref=v1&depth=1"]
        );
    }

    #[test]
    fn test_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sbom.xml");
        let sbom = sample_sbom();

        write(&sbom, &path).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert_eq!(element_texts(&xml, "Name"), vec!["aws_vpc", "s3_bucket"]);
        assert_eq!(element_texts(&xml, "Source"), vec![VPC_SOURCE, "hashicorp/aws"]);
        assert_eq!(element_texts(&xml, "Version"), vec!["v2.0.0", "N/A"]);
        assert_eq!(element_texts(&xml, "ConfigPath"), vec![CONFIG_PATH, CONFIG_PATH]);
    }
}
