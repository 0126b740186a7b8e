//! Feature extraction.
//!
//! Two sources describe the same header fields:
//! - a PE binary, parsed header-only with goblin (DOS/COFF/optional headers,
//!   data directories and the section table; directory contents are never
//!   resolved);
//! - a structured JSON record shaped like
//!   `{"datadirectories": [{"size", "virtual_address"}, ..],
//!     "header": {"optional": {"major_image_version", "minor_image_version"}},
//!     "section": {"sections": [{"vsize"}, ..]}}`.
//!
//! Both implement [`HeaderView`] and go through the same [`derive_features`].
//! Any failure is captured in [`ExtractionResult::Failed`]; no partial vector
//! is ever produced.

use std::fs;
use std::path::Path;

use goblin::pe::header::{Header, SIZEOF_COFF_HEADER, SIZEOF_PE_MAGIC};
use goblin::pe::optional_header::{MAGIC_32, MAGIC_64, OptionalHeader};
use goblin::pe::section_table::SectionTable;
use serde_json::Value;
use tracing::debug;

use crate::error::ExtractError;
use crate::schema::{
    DEBUG_DIRECTORY, EXPORT_DIRECTORY, FeatureVector, IMPORT_DIRECTORY, RESOURCE_DIRECTORY,
};

/// Read access to the header fields the features are derived from.
pub trait HeaderView {
    /// `(major, minor)` image version from the optional header.
    fn image_version(&self) -> Result<(f64, f64), ExtractError>;

    fn directory_size(&self, index: usize) -> Result<f64, ExtractError>;

    fn directory_address(&self, index: usize) -> Result<f64, ExtractError>;

    /// Section count as the source reports it. For binaries this is the COFF
    /// header field, which may disagree with the parsed list.
    fn number_of_sections(&self) -> Result<f64, ExtractError>;

    /// Length of the parsed section list.
    fn section_count(&self) -> Result<usize, ExtractError>;

    fn section_virtual_size(&self, index: usize) -> Result<f64, ExtractError>;
}

/// Derive the seven features from a header view.
pub fn derive_features<V: HeaderView + ?Sized>(view: &V) -> Result<FeatureVector, ExtractError> {
    let debug_size = view.directory_size(DEBUG_DIRECTORY)?;
    let (major, minor) = view.image_version()?;
    let image_version = (major * 100.0 + minor) * 1000.0;
    let iat_rva = view.directory_address(IMPORT_DIRECTORY)?;
    let export_size = view.directory_size(EXPORT_DIRECTORY)?;
    let resource_size = view.directory_size(RESOURCE_DIRECTORY)?;
    let number_of_sections = view.number_of_sections()?;

    // Positional, not by name: the second entry of the section table.
    let virtual_size_2 = if view.section_count()? < 2 {
        0.0
    } else {
        view.section_virtual_size(1)?
    };

    FeatureVector::try_from([
        debug_size,
        image_version,
        iat_rva,
        export_size,
        resource_size,
        virtual_size_2,
        number_of_sections,
    ])
}

/// goblin refuses data directory tables longer than this.
const MAX_DATA_DIRECTORIES: u32 = 16;

/// Offset of `NumberOfRvaAndSizes` from the start of the optional header.
const RVA_COUNT_OFFSET_32: usize = 92;
const RVA_COUNT_OFFSET_64: usize = 108;

/// Header-only view of a PE binary.
pub struct PeHeaders {
    header: Header,
    sections: Vec<SectionTable>,
    /// `NumberOfRvaAndSizes` as declared, before clamping.
    directory_count: usize,
}

impl PeHeaders {
    pub fn parse(bytes: &[u8]) -> Result<Self, ExtractError> {
        let declared = rva_count_field(bytes);
        let header = match declared {
            Some((at, count)) if count > MAX_DATA_DIRECTORIES => {
                // goblin rejects the declared count; read the first 16 entries.
                let mut clamped = bytes.to_vec();
                clamped[at..at + 4].copy_from_slice(&MAX_DATA_DIRECTORIES.to_le_bytes());
                Header::parse(&clamped)?
            }
            _ => Header::parse(bytes)?,
        };
        let directory_count = match (declared, &header.optional_header) {
            (Some((_, count)), _) => count as usize,
            (None, Some(optional)) => optional.windows_fields.number_of_rva_and_sizes as usize,
            (None, None) => 0,
        };

        let mut offset = header.dos_header.pe_pointer as usize
            + SIZEOF_PE_MAGIC
            + SIZEOF_COFF_HEADER
            + header.coff_header.size_of_optional_header as usize;
        let sections = header.coff_header.sections(bytes, &mut offset)?;
        Ok(Self {
            header,
            sections,
            directory_count,
        })
    }

    fn optional(&self) -> Result<&OptionalHeader, ExtractError> {
        self.header
            .optional_header
            .as_ref()
            .ok_or(ExtractError::MissingOptionalHeader)
    }

    /// `(size, virtual_address)` of a data directory; an empty slot reads as zero.
    fn directory(&self, index: usize) -> Result<(u32, u32), ExtractError> {
        let optional = self.optional()?;
        let available = self.directory_count;
        if index >= available {
            return Err(ExtractError::DirectoryOutOfRange { index, available });
        }

        let dirs = &optional.data_directories;
        let table = match index {
            EXPORT_DIRECTORY => dirs.get_export_table(),
            IMPORT_DIRECTORY => dirs.get_import_table(),
            RESOURCE_DIRECTORY => dirs.get_resource_table(),
            DEBUG_DIRECTORY => dirs.get_debug_table(),
            _ => return Err(ExtractError::DirectoryOutOfRange { index, available }),
        };
        let entry = table.as_ref().map(|dd| (dd.size, dd.virtual_address));
        Ok(entry.unwrap_or((0, 0)))
    }
}

impl HeaderView for PeHeaders {
    fn image_version(&self) -> Result<(f64, f64), ExtractError> {
        let fields = &self.optional()?.windows_fields;
        Ok((
            f64::from(fields.major_image_version),
            f64::from(fields.minor_image_version),
        ))
    }

    fn directory_size(&self, index: usize) -> Result<f64, ExtractError> {
        Ok(f64::from(self.directory(index)?.0))
    }

    fn directory_address(&self, index: usize) -> Result<f64, ExtractError> {
        Ok(f64::from(self.directory(index)?.1))
    }

    fn number_of_sections(&self) -> Result<f64, ExtractError> {
        Ok(f64::from(self.header.coff_header.number_of_sections))
    }

    fn section_count(&self) -> Result<usize, ExtractError> {
        Ok(self.sections.len())
    }

    fn section_virtual_size(&self, index: usize) -> Result<f64, ExtractError> {
        self.sections
            .get(index)
            .map(|s| f64::from(s.virtual_size))
            .ok_or_else(|| ExtractError::MissingField(format!("sections[{index}]")))
    }
}

/// Position and value of `NumberOfRvaAndSizes`, when the header reaches it.
fn rva_count_field(bytes: &[u8]) -> Option<(usize, u32)> {
    let pe_pointer = read_u32(bytes, 0x3c)? as usize;
    let optional = pe_pointer.checked_add(SIZEOF_PE_MAGIC + SIZEOF_COFF_HEADER)?;
    let at = match read_u16(bytes, optional)? {
        MAGIC_32 => optional + RVA_COUNT_OFFSET_32,
        MAGIC_64 => optional + RVA_COUNT_OFFSET_64,
        _ => return None,
    };
    Some((at, read_u32(bytes, at)?))
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let raw = bytes.get(at..at.checked_add(2)?)?;
    Some(u16::from_le_bytes([raw[0], raw[1]]))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let raw = bytes.get(at..at.checked_add(4)?)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// View over a structured feature record.
pub struct RawRecord<'a> {
    record: &'a Value,
}

impl<'a> RawRecord<'a> {
    pub fn new(record: &'a Value) -> Self {
        Self { record }
    }

    fn at(&self, pointer: &str) -> Result<&'a Value, ExtractError> {
        self.record
            .pointer(pointer)
            .ok_or_else(|| ExtractError::MissingField(pointer.to_string()))
    }

    fn number_at(&self, pointer: &str) -> Result<f64, ExtractError> {
        self.at(pointer)?
            .as_f64()
            .ok_or_else(|| ExtractError::NotANumber(pointer.to_string()))
    }

    fn array_at(&self, pointer: &str) -> Result<&'a Vec<Value>, ExtractError> {
        self.at(pointer)?
            .as_array()
            .ok_or_else(|| ExtractError::MissingField(pointer.to_string()))
    }

    fn directory_field(&self, index: usize, field: &str) -> Result<f64, ExtractError> {
        let available = self.array_at("/datadirectories")?.len();
        if index >= available {
            return Err(ExtractError::DirectoryOutOfRange { index, available });
        }
        self.number_at(&format!("/datadirectories/{index}/{field}"))
    }
}

impl HeaderView for RawRecord<'_> {
    fn image_version(&self) -> Result<(f64, f64), ExtractError> {
        Ok((
            self.number_at("/header/optional/major_image_version")?,
            self.number_at("/header/optional/minor_image_version")?,
        ))
    }

    fn directory_size(&self, index: usize) -> Result<f64, ExtractError> {
        self.directory_field(index, "size")
    }

    fn directory_address(&self, index: usize) -> Result<f64, ExtractError> {
        self.directory_field(index, "virtual_address")
    }

    fn number_of_sections(&self) -> Result<f64, ExtractError> {
        Ok(self.section_count()? as f64)
    }

    fn section_count(&self) -> Result<usize, ExtractError> {
        Ok(self.array_at("/section/sections")?.len())
    }

    fn section_virtual_size(&self, index: usize) -> Result<f64, ExtractError> {
        self.number_at(&format!("/section/sections/{index}/vsize"))
    }
}

/// Outcome of extracting one sample. Immutable once built.
#[derive(Debug)]
pub enum ExtractionResult {
    Extracted(FeatureVector),
    Failed(ExtractError),
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Extracted(_))
    }

    pub fn vector(&self) -> Option<&FeatureVector> {
        match self {
            ExtractionResult::Extracted(v) => Some(v),
            ExtractionResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            ExtractionResult::Extracted(_) => None,
            ExtractionResult::Failed(e) => Some(e),
        }
    }

    /// Field-wise equality of all seven features. `None` unless both succeeded.
    pub fn same_features(&self, other: &ExtractionResult) -> Option<bool> {
        Some(self.vector()? == other.vector()?)
    }
}

impl From<Result<FeatureVector, ExtractError>> for ExtractionResult {
    fn from(result: Result<FeatureVector, ExtractError>) -> Self {
        match result {
            Ok(v) => ExtractionResult::Extracted(v),
            Err(e) => {
                debug!("feature extraction failed: {e}");
                ExtractionResult::Failed(e)
            }
        }
    }
}

/// Input accepted by [`extract`].
#[derive(Debug, Clone, Copy)]
pub enum FeatureSource<'a> {
    /// Raw bytes of a PE file.
    Binary(&'a [u8]),
    /// A structured feature record.
    Record(&'a Value),
}

pub fn extract(source: FeatureSource<'_>) -> ExtractionResult {
    let result = match source {
        FeatureSource::Binary(bytes) => {
            PeHeaders::parse(bytes).and_then(|pe| derive_features(&pe))
        }
        FeatureSource::Record(record) => derive_features(&RawRecord::new(record)),
    };
    result.into()
}

/// Read and extract a PE file from disk. Read errors count as extraction failures.
pub fn extract_path(path: &Path) -> ExtractionResult {
    match fs::read(path) {
        Ok(bytes) => extract(FeatureSource::Binary(&bytes)),
        Err(e) => Err::<FeatureVector, _>(ExtractError::from(e)).into(),
    }
}

pub fn extract_record(record: &Value) -> ExtractionResult {
    extract(FeatureSource::Record(record))
}

/// Extract one line of a JSON-lines feature file. Malformed JSON counts as a failure.
pub fn extract_json_line(line: &str) -> ExtractionResult {
    match serde_json::from_str::<Value>(line) {
        Ok(record) => extract_record(&record),
        Err(e) => Err::<FeatureVector, _>(ExtractError::from(e)).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Feature;
    use crate::testing::{PeBuilder, record};
    use serde_json::json;

    #[test]
    fn record_extraction_follows_the_derivation_rules() {
        let rec = record(&[(0, 212), (98304, 0), (0, 24000), (0, 0), (0, 0), (0, 0), (0, 0)], (0, 0), &[4096, 100, 512, 64]);
        let result = extract_record(&rec);
        let v = result.vector().expect("record should extract");
        assert_eq!(v[Feature::DebugSize], 0.0);
        assert_eq!(v[Feature::ImageVersion], 0.0);
        assert_eq!(v[Feature::IatRva], 98304.0);
        assert_eq!(v[Feature::ExportSize], 212.0);
        assert_eq!(v[Feature::ResourceSize], 24000.0);
        assert_eq!(v[Feature::VirtualSize2], 100.0);
        assert_eq!(v[Feature::NumberOfSections], 4.0);
    }

    #[test]
    fn image_version_combines_major_and_minor() {
        let rec = record(&[(0, 0); 7], (6, 1), &[]);
        let v = extract_record(&rec);
        assert_eq!(v.vector().unwrap()[Feature::ImageVersion], 601_000.0);
    }

    #[test]
    fn virtual_size_2_is_zero_below_two_sections() {
        for sections in [&[][..], &[777][..]] {
            let rec = record(&[(0, 0); 7], (0, 0), sections);
            let v = *extract_record(&rec).vector().unwrap();
            assert_eq!(v[Feature::VirtualSize2], 0.0);
            assert_eq!(v[Feature::NumberOfSections], sections.len() as f64);
        }
    }

    #[test]
    fn virtual_size_2_is_positional() {
        let rec = json!({
            "datadirectories": vec![json!({"size": 0, "virtual_address": 0}); 16],
            "header": {"optional": {"major_image_version": 0, "minor_image_version": 0}},
            "section": {"sections": [
                {"name": ".data", "vsize": 10},
                {"name": ".text", "vsize": 2222},
                {"name": ".rsrc", "vsize": 30}
            ]}
        });
        let v = *extract_record(&rec).vector().unwrap();
        assert_eq!(v[Feature::VirtualSize2], 2222.0);
    }

    #[test]
    fn record_failures_are_captured() {
        let missing_header = json!({
            "datadirectories": vec![json!({"size": 0, "virtual_address": 0}); 16],
            "section": {"sections": []}
        });
        let result = extract_record(&missing_header);
        assert!(!result.is_success());
        assert!(matches!(result.error(), Some(ExtractError::MissingField(_))));

        let short_table = record(&[(0, 0); 3], (0, 0), &[]);
        assert!(matches!(
            extract_record(&short_table).error(),
            Some(ExtractError::DirectoryOutOfRange { index: 6, available: 3 })
        ));

        let mut bad_vsize = record(&[(0, 0); 7], (0, 0), &[1, 2]);
        bad_vsize["section"]["sections"][1]["vsize"] = json!("big");
        assert!(matches!(
            extract_record(&bad_vsize).error(),
            Some(ExtractError::NotANumber(_))
        ));
    }

    #[test]
    fn malformed_json_line_fails() {
        let result = extract_json_line("{\"datadirectories\": [");
        assert!(matches!(result.error(), Some(ExtractError::Json(_))));
        assert!(result.vector().is_none());
    }

    #[test]
    fn binary_extraction_reads_headers() {
        let bytes = PeBuilder::new()
            .image_version(5, 1)
            .directory(0, 0x9000, 212)
            .directory(1, 0x2000, 40)
            .directory(2, 0xA000, 1024)
            .directory(6, 0x3000, 28)
            .section(".text", 0x1000)
            .section(".rdata", 0x380)
            .section(".rsrc", 0x400)
            .build();

        let result = extract(FeatureSource::Binary(&bytes));
        let v = result.vector().expect("synthetic PE should parse");
        assert_eq!(
            v.to_array(),
            [28.0, 501_000.0, 8192.0, 212.0, 1024.0, 896.0, 3.0]
        );
    }

    #[test]
    fn binary_with_one_section_has_zero_virtual_size_2() {
        let bytes = PeBuilder::new().section(".text", 0x1000).build();
        let v = *extract(FeatureSource::Binary(&bytes)).vector().unwrap();
        assert_eq!(v[Feature::VirtualSize2], 0.0);
        assert_eq!(v[Feature::NumberOfSections], 1.0);
    }

    #[test]
    fn binary_with_short_directory_table_fails() {
        let bytes = PeBuilder::new().rva_count(4).section(".text", 16).build();
        assert!(matches!(
            extract(FeatureSource::Binary(&bytes)).error(),
            Some(ExtractError::DirectoryOutOfRange { index: 6, available: 4 })
        ));
    }

    #[test]
    fn binary_with_oversized_directory_table_extracts() {
        let bytes = PeBuilder::new()
            .rva_count(17)
            .directory(0, 0x9000, 212)
            .directory(1, 98304, 40)
            .directory(2, 0xA000, 24000)
            .section(".text", 0x1000)
            .section(".rdata", 100)
            .build();

        let result = extract(FeatureSource::Binary(&bytes));
        let v = *result.vector().expect("17 declared directories should still parse");
        assert_eq!(v.to_array(), [0.0, 0.0, 98304.0, 212.0, 24000.0, 100.0, 2.0]);

        let ensemble = crate::ensemble::Ensemble::standard();
        assert_eq!(ensemble.score(&result), ensemble.score_vector(&v));
    }

    #[test]
    fn number_of_sections_comes_from_the_coff_header() {
        let bytes = PeBuilder::new()
            .section(".text", 0x1000)
            .section(".rdata", 0x380)
            .section(".rsrc", 0x400)
            .header_section_count(1)
            .build();

        let v = *extract(FeatureSource::Binary(&bytes)).vector().unwrap();
        assert_eq!(v[Feature::NumberOfSections], 1.0);
        assert_eq!(v[Feature::VirtualSize2], 0.0);
    }

    #[test]
    fn garbage_and_truncated_binaries_fail() {
        assert!(!extract(FeatureSource::Binary(b"not a PE at all")).is_success());
        assert!(!extract(FeatureSource::Binary(&[])).is_success());

        let bytes = PeBuilder::new().section(".text", 16).build();
        assert!(!extract(FeatureSource::Binary(&bytes[..0x90])).is_success());
    }

    #[test]
    fn unreadable_path_fails() {
        let result = extract_path(Path::new("/nonexistent/sample.exe"));
        assert!(matches!(result.error(), Some(ExtractError::Io(_))));
    }

    #[test]
    fn equality_is_only_defined_between_successes() {
        let rec = record(&[(0, 0); 7], (1, 0), &[5, 6]);
        let a = extract_record(&rec);
        let b = extract_record(&rec);
        let failed = extract_json_line("");
        assert_eq!(a.same_features(&b), Some(true));
        assert_eq!(a.same_features(&failed), None);
        assert_eq!(failed.same_features(&a), None);
    }
}
