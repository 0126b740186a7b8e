//! Shared fixtures for the CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use headerscan_core::report::sha256_hex;
use serde_json::{Value, json};

const PE_POINTER: usize = 0x80;
const OPTIONAL_SIZE: usize = 96 + 8 * 16;

/// Section virtual sizes of [`suspicious_pe`], in table order.
pub const SECTIONS: [u32; 4] = [0x1000, 100, 0x200, 0x5dc0];

/// A PE32 image that all four classifiers flag: no debug directory,
/// ExportSize 212, IatRVA 98304, four sections.
pub fn suspicious_pe() -> Vec<u8> {
    let coff = PE_POINTER + 4;
    let optional = coff + 20;
    let table = optional + OPTIONAL_SIZE;
    let mut buf = vec![0u8; table + 40 * SECTIONS.len() + 0x200];

    buf[..2].copy_from_slice(b"MZ");
    put_u32(&mut buf, 0x3c, PE_POINTER as u32);
    buf[PE_POINTER..PE_POINTER + 4].copy_from_slice(b"PE\0\0");

    put_u16(&mut buf, coff, 0x14c);
    put_u16(&mut buf, coff + 2, SECTIONS.len() as u16);
    put_u16(&mut buf, coff + 16, OPTIONAL_SIZE as u16);
    put_u16(&mut buf, coff + 18, 0x0102);

    put_u16(&mut buf, optional, 0x10b);
    put_u32(&mut buf, optional + 28, 0x0040_0000);
    put_u32(&mut buf, optional + 32, 0x1000);
    put_u32(&mut buf, optional + 36, 0x200);
    put_u16(&mut buf, optional + 68, 2);
    put_u32(&mut buf, optional + 92, 16);
    for (i, (va, size)) in directories().iter().enumerate() {
        let at = optional + 96 + 8 * i;
        put_u32(&mut buf, at, *va);
        put_u32(&mut buf, at + 4, *size);
    }

    for (i, vsize) in SECTIONS.iter().enumerate() {
        let at = table + 40 * i;
        buf[at..at + 5].copy_from_slice(b".sect");
        put_u32(&mut buf, at + 8, *vsize);
        put_u32(&mut buf, at + 12, 0x1000 * (i as u32 + 1));
    }
    buf
}

/// `(virtual_address, size)` of the first seven data directories of [`suspicious_pe`].
pub fn directories() -> [(u32, u32); 7] {
    [
        (0x30000, 212),
        (98304, 40),
        (0x40000, 24000),
        (0, 0),
        (0, 0),
        (0, 0),
        (0, 0),
    ]
}

/// A structured record carrying `sha256` and the given section virtual sizes.
pub fn record(sha256: &str, sections: &[u32]) -> Value {
    let directories: Vec<Value> = directories()
        .iter()
        .map(|(va, size)| json!({"virtual_address": va, "size": size}))
        .collect();
    let sections: Vec<Value> = sections
        .iter()
        .map(|vsize| json!({"name": ".sect", "vsize": vsize}))
        .collect();
    json!({
        "sha256": sha256,
        "datadirectories": directories,
        "header": {"optional": {"major_image_version": 0, "minor_image_version": 0}},
        "section": {"sections": sections}
    })
}

/// Store `bytes` under `<dir>/<h0>/<h1>/<h2>/<sha256>` and return the hash.
pub fn store_sample(dir: &Path, bytes: &[u8]) -> String {
    let sha = sha256_hex(bytes);
    let shard: PathBuf = sha.chars().take(3).map(String::from).collect();
    let shard = dir.join(shard);
    fs::create_dir_all(&shard).unwrap();
    fs::write(shard.join(&sha), bytes).unwrap();
    sha
}

fn put_u16(buf: &mut [u8], at: usize, value: u16) {
    buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut [u8], at: usize, value: u32) {
    buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
}
