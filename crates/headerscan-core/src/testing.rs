//! Test fixtures: minimal PE32 images and structured feature records.

use serde_json::{Value, json};

const PE_POINTER: usize = 0x80;
const WINDOWS_FIELDS_END: usize = 96;

/// Builds a header-only PE32 image that goblin parses.
pub(crate) struct PeBuilder {
    major_image_version: u16,
    minor_image_version: u16,
    rva_count: u32,
    directories: [(u32, u32); 16],
    sections: Vec<([u8; 8], u32)>,
    header_section_count: Option<u16>,
}

impl PeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            major_image_version: 0,
            minor_image_version: 0,
            rva_count: 16,
            directories: [(0, 0); 16],
            sections: Vec::new(),
            header_section_count: None,
        }
    }

    pub(crate) fn image_version(mut self, major: u16, minor: u16) -> Self {
        self.major_image_version = major;
        self.minor_image_version = minor;
        self
    }

    pub(crate) fn directory(mut self, index: usize, virtual_address: u32, size: u32) -> Self {
        self.directories[index] = (virtual_address, size);
        self
    }

    pub(crate) fn rva_count(mut self, count: u32) -> Self {
        self.rva_count = count;
        self
    }

    pub(crate) fn section(mut self, name: &str, virtual_size: u32) -> Self {
        let mut raw = [0u8; 8];
        for (dst, src) in raw.iter_mut().zip(name.bytes()) {
            *dst = src;
        }
        self.sections.push((raw, virtual_size));
        self
    }

    /// Override the COFF `NumberOfSections` field; the table itself is
    /// truncated to this many entries when parsed.
    pub(crate) fn header_section_count(mut self, count: u16) -> Self {
        self.header_section_count = Some(count);
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let optional_size = WINDOWS_FIELDS_END + 8 * self.rva_count as usize;
        let coff = PE_POINTER + 4;
        let optional = coff + 20;
        let table = optional + optional_size;
        let mut buf = vec![0u8; table + 40 * self.sections.len() + 0x200];

        buf[0] = b'M';
        buf[1] = b'Z';
        put_u32(&mut buf, 0x3c, PE_POINTER as u32);
        buf[PE_POINTER..PE_POINTER + 4].copy_from_slice(b"PE\0\0");

        let count = self
            .header_section_count
            .unwrap_or(self.sections.len() as u16);
        put_u16(&mut buf, coff, 0x14c);
        put_u16(&mut buf, coff + 2, count);
        put_u16(&mut buf, coff + 16, optional_size as u16);
        put_u16(&mut buf, coff + 18, 0x0102);

        put_u16(&mut buf, optional, 0x10b);
        put_u32(&mut buf, optional + 28, 0x0040_0000);
        put_u32(&mut buf, optional + 32, 0x1000);
        put_u32(&mut buf, optional + 36, 0x200);
        put_u16(&mut buf, optional + 44, self.major_image_version);
        put_u16(&mut buf, optional + 46, self.minor_image_version);
        put_u16(&mut buf, optional + 68, 2);
        put_u32(&mut buf, optional + 92, self.rva_count);
        for (i, (va, size)) in self.directories.iter().take(self.rva_count as usize).enumerate() {
            let at = optional + WINDOWS_FIELDS_END + 8 * i;
            put_u32(&mut buf, at, *va);
            put_u32(&mut buf, at + 4, *size);
        }

        for (i, (name, virtual_size)) in self.sections.iter().enumerate() {
            let at = table + 40 * i;
            buf[at..at + 8].copy_from_slice(name);
            put_u32(&mut buf, at + 8, *virtual_size);
            put_u32(&mut buf, at + 12, 0x1000 * (i as u32 + 1));
        }

        buf
    }
}

fn put_u16(buf: &mut [u8], at: usize, value: u16) {
    buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
    buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

/// A structured record with `(virtual_address, size)` directories, a
/// `(major, minor)` image version and one section per virtual size.
pub(crate) fn record(directories: &[(u32, u32)], version: (u16, u16), sections: &[u32]) -> Value {
    let directories: Vec<Value> = directories
        .iter()
        .map(|(va, size)| json!({"virtual_address": va, "size": size}))
        .collect();
    let sections: Vec<Value> = sections
        .iter()
        .enumerate()
        .map(|(i, vsize)| json!({"name": format!(".s{i}"), "vsize": vsize}))
        .collect();
    json!({
        "datadirectories": directories,
        "header": {"optional": {
            "major_image_version": version.0,
            "minor_image_version": version.1
        }},
        "section": {"sections": sections}
    })
}
