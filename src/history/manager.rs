use crate::core::buffer::PixelBuffer;
use crate::core::error::Result;

/// 画布快照：提交时刻整块像素数据的独立深拷贝。
#[derive(Debug, Clone)]
pub struct Snapshot {
    data: Vec<u8>,
}

impl Snapshot {
    fn of(buffer: &PixelBuffer) -> Self {
        Self { data: buffer.bytes().to_vec() }
    }

    fn restore_into(&self, buffer: &mut PixelBuffer) -> Result<()> {
        buffer.load_bytes(&self.data)
    }
}

#[derive(Debug)]
pub struct HistoryManager {
    pub entries: Vec<Snapshot>,
    pub step: usize,
    pub max_steps: usize,
}

impl HistoryManager {
    pub const DEFAULT_MAX_STEPS: usize = 20;

    pub fn new(max_steps: usize) -> Self {
        Self { entries: Vec::new(), step: 0, max_steps }
    }

    /// 重置为单条初始快照。画布重建（新建/换模板/改尺寸）后必须调用。
    pub fn initialize(&mut self, buffer: &PixelBuffer) {
        self.entries = vec![Snapshot::of(buffer)];
        self.step = 0;
    }

    /// 提交一次完整动作。游标不在末尾时先剪掉重做分支，超出容量时淘汰最旧一条。
    pub fn commit(&mut self, buffer: &PixelBuffer) {
        self.entries.truncate(self.step + 1);
        self.entries.push(Snapshot::of(buffer));
        if self.entries.len() > self.max_steps {
            self.entries.remove(0);
        }
        self.step = self.entries.len() - 1;
    }

    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if self.step == 0 {
            return false;
        }
        if self.entries[self.step - 1].restore_into(buffer).is_err() {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn redo(&mut self, buffer: &mut PixelBuffer) -> bool {
        if self.step + 1 >= self.entries.len() {
            return false;
        }
        if self.entries[self.step + 1].restore_into(buffer).is_err() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.step < self.entries.len() - 1
    }
}
