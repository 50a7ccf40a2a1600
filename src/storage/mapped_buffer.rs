//! Memory-Mapped Buffer untuk persisted encoded data
//!
//! Buffer hasil `Writer` disimpan utuh ke file, lalu di-mmap kembali
//! supaya `Reader` bisa langsung membaca dari page cache (zero-copy).
//! Tidak ada header: isi file adalah bytes wire apa adanya.

use memmap2::{Mmap, MmapMut, MmapOptions};
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::debug;

use crate::codec::Reader;
use crate::error::Result;

/// Read-only mapping dari file berisi encoded bytes
pub struct MappedBuffer {
    // None untuk file kosong - mapping 0 bytes tidak portable
    mmap: Option<Mmap>,
}

impl MappedBuffer {
    /// Tulis `bytes` ke `path` lewat writable mapping, replace isi lama
    pub fn persist<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        file.set_len(bytes.len() as u64)?;

        if !bytes.is_empty() {
            // SAFETY: File baru di-truncate dan hanya dipegang oleh fungsi ini
            let mut mmap: MmapMut = unsafe { MmapOptions::new().len(bytes.len()).map_mut(&file)? };
            mmap.copy_from_slice(bytes);
            mmap.flush()?;
        }

        debug!(path = %path.display(), len = bytes.len(), "persisted encoded buffer");
        Ok(())
    }

    /// Map file read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: Mapping read-only; file tidak boleh dimodifikasi proses lain
            // selama MappedBuffer hidup
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        debug!(path = %path.display(), len, "mapped encoded buffer");
        Ok(Self { mmap })
    }

    /// Isi file sebagai byte slice
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.mmap {
            Some(mmap) => &mmap[..],
            None => &[],
        }
    }

    /// Reader baru di atas mapping, cursor mulai di 0
    #[inline(always)]
    pub fn reader(&self) -> Reader<'_> {
        Reader::new(self.as_bytes())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_none()
    }
}

impl AsRef<[u8]> for MappedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
